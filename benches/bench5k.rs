use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use parish_rolodex::prelude::{Contact, ContactManager, ContactPatch, MemStorage};

const POPULATIONS: [&str; 5] = ["Sevilla", "Madrid", "Toledo", "Écija", "Cádiz"];

// Helper to create a manager prepopulated with `n` contacts in-memory.
// MemStorage keeps `save()` cheap so the measurements stay on CPU work.
fn make_manager_with_n(n: usize) -> ContactManager {
    let contacts = (0..n)
        .map(|i| Contact {
            name: Some(format!("User{i}")),
            phone: Some("600111222".to_string()),
            email: Some(format!("user{i}@example.com")),
            population: Some(POPULATIONS[i % POPULATIONS.len()].to_string()),
            ..Default::default()
        })
        .collect();

    ContactManager::new(Box::new(MemStorage::with_contacts(contacts))).expect("manager not created")
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding to 5k contacts (in-memory single add)", |b| {
        b.iter_batched(
            || make_manager_with_n(5_000),
            |mut manager| {
                let new_contact = Contact::new(
                    "Zoe".to_string(),
                    "600999999".to_string(),
                    "zoe@example.com".to_string(),
                    "Sevilla".to_string(),
                );
                manager.add_contact(new_contact).expect("add failed");
                black_box(manager.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("Searching 5k contacts by population", |b| {
        let manager = make_manager_with_n(5_000);
        b.iter(|| {
            let found = manager.search_by_population(black_box("sevilla"));
            black_box(found.len());
        });
    });
}

fn bench_edit(c: &mut Criterion) {
    c.bench_function("Editing one of 5k contacts", |b| {
        b.iter_batched(
            || make_manager_with_n(5_000),
            |mut manager| {
                let patch = ContactPatch {
                    phone: Some("699000000".to_string()),
                    ..Default::default()
                };
                black_box(manager.edit_contact(2_500, patch).expect("edit failed"));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("Deleting the first of 5k contacts", |b| {
        b.iter_batched(
            || make_manager_with_n(5_000),
            |mut manager| {
                black_box(manager.delete_contact(0).expect("delete failed"));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_add, bench_search, bench_edit, bench_delete);
criterion_main!(benches);
