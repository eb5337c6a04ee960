use contact_ease::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    run_app()
}
