use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::BenchError;

/// How a generated array is ordered before it is handed to the sorts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Ascending,
    Descending,
    UnorderedA,
    UnorderedB,
}

impl Variant {
    /// All variants in report order.
    pub const ALL: [Variant; 4] = [
        Variant::Ascending,
        Variant::Descending,
        Variant::UnorderedA,
        Variant::UnorderedB,
    ];

    /// Maps the 1-based selector used in the report (1 ascending, 2 descending, 3 and 4
    /// unordered) to a variant.
    pub fn from_selector(selector: u8) -> Result<Self, BenchError> {
        match selector {
            1 => Ok(Variant::Ascending),
            2 => Ok(Variant::Descending),
            3 => Ok(Variant::UnorderedA),
            4 => Ok(Variant::UnorderedB),
            _ => Err(BenchError::InvalidParameter(format!(
                "array variant selector {selector} is outside 1..=4"
            ))),
        }
    }

    /// 1-based position in the report.
    pub fn index(self) -> usize {
        match self {
            Variant::Ascending => 1,
            Variant::Descending => 2,
            Variant::UnorderedA => 3,
            Variant::UnorderedB => 4,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Ascending => "ascending",
            Variant::Descending => "descending",
            Variant::UnorderedA => "unordered_a",
            Variant::UnorderedB => "unordered_b",
        };
        f.write_str(name)
    }
}

/// Seed for the whole process, the wall clock in seconds at first use and stable afterwards.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    })
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates `n` random values ordered according to `variant`.
///
/// Values span the whole `i64` range. Successive calls continue the stream of `rng`, so the two
/// unordered variants are independent draws.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    variant: Variant,
    n: i64,
) -> Result<Vec<i64>, BenchError> {
    let len = usize::try_from(n).map_err(|_| {
        BenchError::InvalidParameter(format!("array length must not be negative, got {n}"))
    })?;

    let mut v = alloc_exact(len)?;
    v.extend((0..len).map(|_| rng.gen::<i64>()));

    match variant {
        Variant::Ascending => v.sort_unstable(),
        Variant::Descending => v.sort_unstable_by(|a, b| b.cmp(a)),
        Variant::UnorderedA | Variant::UnorderedB => {}
    }

    Ok(v)
}

/// Copies `v` into freshly allocated storage.
pub fn duplicate(v: &[i64]) -> Result<Vec<i64>, BenchError> {
    let mut copy = alloc_exact(v.len())?;
    copy.extend_from_slice(v);

    Ok(copy)
}

fn alloc_exact(len: usize) -> Result<Vec<i64>, BenchError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| BenchError::AllocationFailure { len })?;

    Ok(v)
}
