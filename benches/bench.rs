use criterion::{Criterion, criterion_group, criterion_main};
use vista_leads::{LeadFormConfig, LeadInput, is_valid_email, validate};

fn criterion_benchmark(c: &mut Criterion) {
    let valid = LeadInput::new("Jane Doe", "jane@x.com", "9999999999");
    let invalid = LeadInput::new("", "bad", "");
    let long_email = format!("{}@{}.com", "a".repeat(512), "b".repeat(512));

    c.bench_function("validate/valid", |b| b.iter(|| validate(&valid)));
    c.bench_function("validate/invalid", |b| b.iter(|| validate(&invalid)));
    c.bench_function("email/long", |b| b.iter(|| is_valid_email(&long_email)));

    let config = LeadFormConfig::default();
    c.bench_function("payload", |b| {
        b.iter(|| valid.to_payload(&config.default_note))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
