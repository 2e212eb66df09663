/// ISO 3166-1 alpha-2 codes the crate refers to by name, plus the "unknown"
/// region.
pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn is_unknown(region_code: &str) -> bool {
        region_code == Self::get_unknown()
    }

    pub fn zz() -> &'static str {
        return "ZZ";    
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn sa() -> &'static str {
        "SA"
    }

    pub fn us() -> &'static str {
        "US"
    }
}
