use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neo58::{decode, decode_checked, encode, encode_checked};

// 32-byte block hash with leading zero bytes.
const TXID: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x19, 0xd6, 0x68, 0x9c, 0x08, 0x5a, 0xe1, 0x65, 0x83, 0x1e,
    0x93, 0x4f, 0xf7, 0x63, 0xae, 0x46, 0xa2, 0xa6, 0xc1, 0x72, 0xb3, 0xf1, 0xb6, 0x0a, 0x8c,
    0xe2, 0x6f,
];

const SCRIPT_HASH: [u8; 20] = [
    0xa0, 0xd2, 0xf2, 0x77, 0xfd, 0xb6, 0xd5, 0xba, 0xfe, 0x4e, 0x42, 0x00, 0x91, 0x13, 0xd2,
    0x1c, 0x84, 0x08, 0x27, 0xba,
];

fn bench_encode(c: &mut Criterion) {
    c.bench_function("neo58_encode_32", |b| b.iter(|| encode(black_box(&TXID))));
}

fn bench_decode(c: &mut Criterion) {
    let encoded = encode(&TXID);
    c.bench_function("neo58_decode_32", |b| {
        b.iter(|| decode(black_box(&encoded)).unwrap())
    });
}

fn bench_checked(c: &mut Criterion) {
    c.bench_function("neo58_encode_checked_address", |b| {
        b.iter(|| encode_checked(black_box(23), black_box(&SCRIPT_HASH)))
    });
    let address = encode_checked(23, &SCRIPT_HASH);
    c.bench_function("neo58_decode_checked_address", |b| {
        b.iter(|| decode_checked(black_box(&address)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_checked);
criterion_main!(benches);
