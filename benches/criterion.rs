// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use tsrt_vm::{Array, Number, Value, add, is_loosely_equal, parse_float, parse_int, to_number, to_string};

macro_rules! bench_harness {
    ($group:ident, $($name:literal => $setup:expr, $routine:expr;)*) => {
        fn $group(c: &mut Criterion) {
            $(
                c.bench_function($name, |b| {
                    b.iter_batched($setup, $routine, BatchSize::SmallInput)
                });
            )*
        }
    };
}

fn numbers(len: usize) -> Array {
    (0..len).map(|n| Value::from(n as f64 * 1.5)).collect()
}

bench_harness!(
    bench_coercions,
    "to_number (decimal string)" => || Value::from("  12345.678e-3 "), |v| to_number(black_box(&v));
    "to_number (hex string)" => || Value::from("0x7fffffff"), |v| to_number(black_box(&v));
    "to_string (double)" => || Value::from(0.1 + 0.2), |v| to_string(black_box(&v));
    "to_string (array)" => || Value::from(numbers(64)), |v| to_string(black_box(&v));
    "parse_int" => || Value::from("  -0x1234abcd"), |v| parse_int(black_box(&v), &Value::Undefined);
    "parse_float" => || Value::from("3.14159265358979 rest"), |v| parse_float(black_box(&v));
);

bench_harness!(
    bench_operators,
    "add (string concat)" => || (Value::from("count: "), Value::from(42)), |(a, b)| add(black_box(&a), &b);
    "add (numbers)" => || (Value::from(1.25), Value::from(true)), |(a, b)| add(black_box(&a), &b);
    "loose equality (string, number)" => || (Value::from("123"), Value::from(123)), |(a, b)| is_loosely_equal(black_box(&a), &b);
);

bench_harness!(
    bench_methods,
    "Number.prototype.toFixed" => || Number::from(123.456789), |n| black_box(n).to_fixed(4);
    "Number.prototype.toString(36)" => || Number::from(987654321.0), |n| black_box(n).to_string_radix(Some(36));
    "String.prototype.slice (non-ascii)" => || tsrt_vm::String::from("héllo wörld ".repeat(16)), |s| black_box(&s).slice(-40, Some(-3));
    "Array.prototype.splice" => || numbers(256), |mut a| a.splice(64, 32, numbers(16));
    "Array.prototype.join" => || numbers(256), |a| black_box(&a).join(",");
    "invoke push by name" => || Value::from(numbers(16)), |mut v| v.invoke("push", &[Value::from(1)]);
);

criterion_group!(benches, bench_coercions, bench_operators, bench_methods);
criterion_main!(benches);
