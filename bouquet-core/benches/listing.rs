use std::num::NonZeroU32;

use bouquet_core::library::{PageRequest, list_folder, paginate};
use bouquet_core::{Category, CategorySet};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_paginate(c: &mut Criterion) {
    let files: Vec<String> = (0..10_000).map(|i| format!("photo_{i:05}.jpg")).collect();
    let limit = NonZeroU32::new(30).unwrap();

    c.bench_function("paginate_middle_page", |b| {
        b.iter(|| paginate(&files, PageRequest::new(NonZeroU32::new(150).unwrap(), limit)));
    });
}

fn bench_list_folder(c: &mut Criterion) {
    let root = tempfile::tempdir().unwrap();
    let category = CategorySet::wedding()
        .get("reception")
        .cloned()
        .unwrap_or_else(|| Category::parse("reception").unwrap());
    let dir = root.path().join(category.as_str());
    std::fs::create_dir_all(&dir).unwrap();
    for i in 0..500 {
        std::fs::write(dir.join(format!("photo_{i:03}.jpg")), b"").unwrap();
    }

    let runtime = tokio::runtime::Runtime::new().unwrap();
    c.bench_function("list_folder_500", |b| {
        b.iter(|| runtime.block_on(list_folder(root.path(), &category)).unwrap());
    });
}

criterion_group!(benches, bench_paginate, bench_list_folder);
criterion_main!(benches);
