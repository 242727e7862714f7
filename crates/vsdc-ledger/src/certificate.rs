use vsdc_types::CertificateId;

/// Mints certificate ids for newly issued invoices.
///
/// Called from inside the ledger's critical section, so implementations must
/// not block.
pub trait CertificateSource: Send + Sync {
    fn next_certificate(&self) -> CertificateId;
}

/// Draws each id from the calling thread's generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomCertificates;

impl CertificateSource for RandomCertificates {
    fn next_certificate(&self) -> CertificateId {
        CertificateId::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_source_mints_distinct_ids() {
        let source = RandomCertificates;
        let ids: HashSet<_> = (0..1000).map(|_| source.next_certificate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
