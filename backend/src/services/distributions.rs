//! Cryptosuite and DID method distributions.
//!
//! Pure lookup: each filter segment selects one hand-authored table. Colors
//! are fixed per category so a slice keeps its color across filters.

use crate::models::{ChartColor, DistributionPair, DistributionSlice, FilterSegment, Taxonomy};

const fn slice(name: &'static str, value: u32, color: ChartColor) -> DistributionSlice {
    DistributionSlice { name, value, color }
}

const fn ed25519(value: u32) -> DistributionSlice {
    slice("Ed25519", value, ChartColor::Chart1)
}

const fn es256k(value: u32) -> DistributionSlice {
    slice("ES256K", value, ChartColor::Chart2)
}

const fn rsa(value: u32) -> DistributionSlice {
    slice("RSA", value, ChartColor::Chart3)
}

const fn did_web(value: u32) -> DistributionSlice {
    slice("did:web", value, ChartColor::Chart4)
}

const fn did_key(value: u32) -> DistributionSlice {
    slice("did:key", value, ChartColor::Chart5)
}

const fn did_ethr(value: u32) -> DistributionSlice {
    slice("did:ethr", value, ChartColor::Chart1)
}

static CRYPTOSUITE_ALL: DistributionPair = DistributionPair {
    issuance: &[ed25519(40), es256k(35), rsa(25)],
    verification: &[ed25519(45), es256k(40), rsa(15)],
};

static CRYPTOSUITE_VERIFIABLE_DOCS: DistributionPair = DistributionPair {
    issuance: &[ed25519(45), es256k(30), rsa(25)],
    verification: &[ed25519(50), es256k(35), rsa(15)],
};

static CRYPTOSUITE_ETR: DistributionPair = DistributionPair {
    issuance: &[ed25519(60), es256k(25), rsa(15)],
    verification: &[ed25519(55), es256k(30), rsa(15)],
};

static DID_METHOD_ALL: DistributionPair = DistributionPair {
    issuance: &[did_web(40), did_key(35), did_ethr(25)],
    verification: &[did_web(38), did_key(42), did_ethr(20)],
};

static DID_METHOD_VERIFIABLE_DOCS: DistributionPair = DistributionPair {
    issuance: &[did_web(50), did_key(30), did_ethr(20)],
    verification: &[did_web(45), did_key(35), did_ethr(20)],
};

static DID_METHOD_ETR: DistributionPair = DistributionPair {
    issuance: &[did_web(35), did_key(40), did_ethr(25)],
    verification: &[did_web(30), did_key(45), did_ethr(25)],
};

/// Look up the distribution table for a taxonomy under a filter.
pub fn compute_distribution(taxonomy: Taxonomy, filter: FilterSegment) -> &'static DistributionPair {
    log::debug!("Looking up {} distribution for filter {}", taxonomy, filter);

    match (taxonomy, filter) {
        (Taxonomy::Cryptosuite, FilterSegment::All) => &CRYPTOSUITE_ALL,
        (Taxonomy::Cryptosuite, FilterSegment::VerifiableDocs) => &CRYPTOSUITE_VERIFIABLE_DOCS,
        (Taxonomy::Cryptosuite, FilterSegment::Etr) => &CRYPTOSUITE_ETR,
        (Taxonomy::DidMethod, FilterSegment::All) => &DID_METHOD_ALL,
        (Taxonomy::DidMethod, FilterSegment::VerifiableDocs) => &DID_METHOD_VERIFIABLE_DOCS,
        (Taxonomy::DidMethod, FilterSegment::Etr) => &DID_METHOD_ETR,
    }
}
