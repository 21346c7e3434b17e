//! Running totals per address class.

use crate::models::{Classification, Network};
use serde::Serialize;
use std::ops::Add;

/// Network and assignable-address counts for one class.
#[derive(Serialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub networks: u64,
    pub addresses: u64,
}

impl Add for Bucket {
    type Output = Bucket;

    fn add(self, other: Bucket) -> Bucket {
        Bucket {
            networks: self.networks + other.networks,
            addresses: self.addresses + other.addresses,
        }
    }
}

/// Final totals, `total` being the sum of the other two.
#[derive(Serialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub private: Bucket,
    pub public: Bucket,
    pub total: Bucket,
}

#[derive(Debug, Default)]
pub struct Aggregator {
    private: Bucket,
    public: Bucket,
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator::default()
    }

    /// Add one network to the bucket of its class.
    pub fn accumulate(&mut self, classification: Classification, network: &Network) {
        let bucket = match classification {
            Classification::Private => &mut self.private,
            Classification::Public => &mut self.public,
        };
        bucket.networks += 1;
        bucket.addresses += network.size();
    }

    /// Assignable addresses accumulated so far, both classes.
    pub fn running_total(&self) -> u64 {
        self.private.addresses + self.public.addresses
    }

    pub fn summary(&self) -> Summary {
        Summary {
            private: self.private,
            public: self.public,
            total: self.private + self.public,
        }
    }
}
