// Draft finalization benchmarks.
//
// Covers payload encoding, silo key derivation at a few levels, AES-GCM
// sealing, and full finalization against an in-memory gateway.

use std::sync::Arc;

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use weave_client::codec::{Base64UrlCodec, PayloadCodec};
use weave_client::crypto::{encrypt, EncryptionKey};
use weave_client::silo::derive_resource;
use weave_client::transaction::{
    AddressResolver, CollaboratorError, DraftFinalizer, FeeOracle, TransactionDraft,
};
use weave_client::wallet::{Address, Jwk};
use weave_client::Winston;

const MODULUS: &str =
    "AQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHyAhIiMkJSYnKCkqKywtLi8wMTIzNDU2Nzg5Ojs8PT4_QA";

struct InstantGateway;

#[async_trait]
impl AddressResolver for InstantGateway {
    async fn last_transaction_id(&self, _address: &Address) -> Result<String, CollaboratorError> {
        Ok("anchor".to_string())
    }
}

#[async_trait]
impl FeeOracle for InstantGateway {
    async fn quote_fee(
        &self,
        byte_length: usize,
        _target: Option<&Address>,
    ) -> Result<Winston, CollaboratorError> {
        Ok(Winston::new(byte_length as u128))
    }
}

fn bench_encode_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/encode_text");
    for size in [64usize, 4_096, 262_144] {
        let text = "a".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Base64UrlCodec.encode_text(text));
        });
    }
    group.finish();
}

fn bench_silo_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("silo/derive_resource");
    for level in [0u32, 8, 12] {
        let locator = format!("bubble.{level}");
        group.bench_with_input(BenchmarkId::from_parameter(level), &locator, |b, locator| {
            b.iter(|| derive_resource(locator));
        });
    }
    group.finish();
}

fn bench_seal_payload(c: &mut Criterion) {
    let key = EncryptionKey::new([0x42; 32]);
    let payload = vec![0xAB; 4_096];

    c.bench_function("aes_gcm/seal_4k", |b| {
        b.iter(|| encrypt(&key, &payload));
    });
}

fn bench_finalize(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let gateway = Arc::new(InstantGateway);
    let finalizer = DraftFinalizer::new(gateway.clone(), gateway);
    let key = Jwk::public(MODULUS, "AQAB");

    c.bench_function("finalize/plain", |b| {
        b.iter(|| {
            runtime.block_on(finalizer.finalize(TransactionDraft::new().data("hello weave"), &key))
        });
    });

    c.bench_function("finalize/private_level_4", |b| {
        b.iter(|| {
            runtime.block_on(finalizer.finalize_private(
                TransactionDraft::new().data("hello weave"),
                &key,
                "bubble.4",
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_encode_payload,
    bench_silo_derivation,
    bench_seal_payload,
    bench_finalize,
);
criterion_main!(benches);
