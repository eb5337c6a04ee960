use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_ease::prelude::{Contact, ContactManager, ContactStore, JsonStorage};

// Store prepopulated with `n` contacts in memory; no disk I/O in setup.
fn make_store_with_n(n: usize) -> ContactManager {
    let contacts = (0..n)
        .map(|i| Contact {
            first_name: format!("User{i}"),
            last_name: format!("Family{}", i % 97),
            phone: "08885499529".to_string(),
            email: format!("user{i}@yahoo.com"),
        })
        .collect();
    ContactManager::with_contacts(contacts)
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("adding to 5k contacts (duplicate scan + push)", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| {
                let result = store.add(Contact::new("Zoe", "Last", "08885499529", "zoe@x.com"));
                black_box(result.is_ok());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_find(c: &mut Criterion) {
    let store = make_store_with_n(5_000);
    c.bench_function("finding last of 5k contacts", |b| {
        b.iter(|| black_box(store.find(black_box("User4999"), black_box("Family50"))));
    });
}

fn bench_edit(c: &mut Criterion) {
    c.bench_function("editing middle of 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| {
                let edited = store.edit(
                    "User2500",
                    "Family75",
                    Contact::new("User2500", "Family75", "000", "new@x.com"),
                );
                black_box(edited);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("deleting first of 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| black_box(store.delete("User0", "Family0")),
            BatchSize::SmallInput,
        );
    });
}

fn bench_save_and_load_json(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = JsonStorage::new(dir.path().join("contacts.json"));
    let store = make_store_with_n(5_000);

    c.bench_function("saving 5k contacts to json", |b| {
        b.iter(|| store.save_to(&storage).expect("save"));
    });

    c.bench_function("loading 5k contacts from json", |b| {
        b.iter(|| black_box(storage.load().expect("load")));
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_find,
    bench_edit,
    bench_delete,
    bench_save_and_load_json
);
criterion_main!(benches);
