#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use tablegen::*;
use xinterp::{
    one_dim::Interp1D, Breakpoints, Fills, Forward1D, Inverse1D, Method, Resolved, Snap1D,
};

enum Kind {
    Interp,
    Extrap,
}

macro_rules! bench_interp_specific {
    ($group:ident, $tablesize:expr, $size:expr, $kind:expr) => {
        $group.throughput(Throughput::Elements(*$size as u64));
        let scan_or_shuffle = "Shuffled Order";

        $group.bench_with_input(
            BenchmarkId::new(
                format!("Forward {}-point, {}", $tablesize, scan_or_shuffle),
                $size,
            ),
            $size,
            |b, &size| {
                let (xs, ys) = gen_table($tablesize);
                let obs = match $kind {
                    Kind::Interp => gen_interp_obs(&xs, size, true),
                    Kind::Extrap => gen_extrap_obs(&xs, size),
                };
                let mut out = vec![Resolved::Unset; size];

                b.iter(|| {
                    black_box({
                        let table = Breakpoints::new(&xs, &ys).unwrap();
                        let interp = Forward1D::new(table)
                            .unwrap()
                            .with_fills(Fills::unset())
                            .unwrap();
                        interp.eval(&obs, &mut out).unwrap()
                    })
                });
            },
        );

        for method in [Method::None, Method::Nearest, Method::ForwardFill] {
            $group.bench_with_input(
                BenchmarkId::new(
                    format!(
                        "Inverse {} {}-point, {}",
                        method, $tablesize, scan_or_shuffle
                    ),
                    $size,
                ),
                $size,
                |b, &size| {
                    let (xs, ys) = gen_table($tablesize);
                    let obs = match $kind {
                        Kind::Interp => gen_interp_obs(&ys, size, true),
                        Kind::Extrap => gen_extrap_obs(&ys, size),
                    };
                    let mut out = vec![Resolved::Unset; size];

                    b.iter(|| {
                        black_box({
                            let table = Breakpoints::new(&xs, &ys).unwrap();
                            let interp = Inverse1D::new(table, method).unwrap();
                            interp.eval(&obs, &mut out).unwrap()
                        })
                    });
                },
            );
        }

        $group.bench_with_input(
            BenchmarkId::new(
                format!("Snap nearest {}-point, {}", $tablesize, scan_or_shuffle),
                $size,
            ),
            $size,
            |b, &size| {
                let (xs, ys) = gen_table($tablesize);
                let obs = match $kind {
                    Kind::Interp => gen_interp_obs(&ys, size, true),
                    Kind::Extrap => gen_extrap_obs(&ys, size),
                };
                let mut out = vec![Resolved::Unset; size];

                b.iter(|| {
                    black_box({
                        let table = Breakpoints::new(&xs, &ys).unwrap();
                        let interp = Snap1D::new(table, Method::Nearest).unwrap();
                        interp.eval(&obs, &mut out).unwrap()
                    })
                });
            },
        );
    };
}

fn bench_interp(c: &mut Criterion) {
    for tablesize in [10, 10_000] {
        let mut group = c.benchmark_group(format!("Interp_Shuffled_{tablesize}-table"));
        for size in [1, 100, 1_000_000].iter() {
            bench_interp_specific!(group, tablesize, size, Kind::Interp);
        }
        group.finish();
    }
}

fn bench_extrap(c: &mut Criterion) {
    for tablesize in [10] {
        let mut group = c.benchmark_group(format!("Extrap_{tablesize}-table"));
        for size in [1, 100, 1_000_000].iter() {
            bench_interp_specific!(group, tablesize, size, Kind::Extrap);
        }
        group.finish();
    }
}

criterion_group!(benches_interp, bench_interp);
criterion_group!(benches_extrap, bench_extrap);
criterion_main!(benches_interp, benches_extrap,);

mod tablegen {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::Rng;
    use rand::SeedableRng;
    use xinterp::utils::linspace;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    // A table of nanosecond timestamps over one day against a strictly increasing
    // counter with irregular steps.
    pub fn gen_table(size: usize) -> (Vec<i64>, Vec<i64>) {
        let mut rng = rng_fixed_seed();
        let start = 1_700_000_000_000_000_000_i64;
        let xs = linspace(start, start + 86_400_000_000_000, size).unwrap();

        let mut acc = 0_i64;
        let ys = (0..size)
            .map(|_| {
                acc += rng.random_range(1..1_000_000);
                acc
            })
            .collect();

        (xs, ys)
    }

    // Observation points strictly inside the table, optionally shuffled.
    pub fn gen_interp_obs(points: &[i64], size: usize, shuffled: bool) -> Vec<i64> {
        let n = points.len();
        let mut obs = linspace(points[1], points[n - 2], size.max(2)).unwrap();
        obs.truncate(size);
        if shuffled {
            obs.shuffle(&mut rng_fixed_seed());
        }
        obs
    }

    // Observation points past the last breakpoint.
    pub fn gen_extrap_obs(points: &[i64], size: usize) -> Vec<i64> {
        let last = points[points.len() - 1];
        let mut obs = linspace(last + 1, last + 1_000, size.max(2)).unwrap();
        obs.truncate(size);
        obs
    }
}
