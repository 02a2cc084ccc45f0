//! Resolution of raw cellular channel numbers into standardized bands and
//! center frequencies.
//!
//! LTE cells are identified by an EARFCN, WCDMA cells by a UARFCN and 5G NR
//! cells by an NRARFCN. Each numbering scheme carves the integer space into
//! per-band intervals; a second table maps the resolved band to a fixed
//! center frequency in MHz.
//!
//! Every function here is total: a channel number outside all intervals
//! resolves to band 0 and 0 MHz rather than failing. Malformed or
//! technology-mismatched identifiers must never abort snapshot construction,
//! so "unknown" is data, not an error.

/// Band number reported for channel numbers outside every known interval.
pub const UNKNOWN_BAND: u16 = 0;

/// Resolves an EARFCN to its LTE band number.
///
/// Intervals are checked in ascending order and must not overlap; the first
/// containing interval wins.
pub fn lte_band(earfcn: i32) -> u16 {
    match earfcn {
        0..=599 => 1,
        600..=1199 => 2,
        1200..=1949 => 3,
        1950..=2399 => 4,
        2400..=2649 => 5,
        2650..=2749 => 6,
        2750..=3449 => 7,
        3450..=3799 => 8,
        3800..=4149 => 9,
        4150..=4749 => 10,
        9210..=9659 => 20,
        36000..=36199 => 33,
        36200..=36349 => 34,
        36350..=36949 => 35,
        36950..=37549 => 36,
        37550..=37749 => 37,
        37750..=38249 => 38,
        38250..=38649 => 39,
        38650..=39649 => 40,
        39650..=41589 => 41,
        41590..=43589 => 42,
        43590..=45589 => 43,
        _ => UNKNOWN_BAND,
    }
}

/// Fixed center frequency in MHz for an LTE band.
///
/// Not every classifiable band has an entry; bands 9, 10, 33-37, 39, 42 and
/// 43 resolve to 0 MHz. That gap is carried over from the source tables on
/// purpose, do not fill it in.
pub fn lte_band_frequency(band: u16) -> u32 {
    match band {
        1 => 2100,
        2 => 1900,
        3 => 1800,
        4 => 1700,
        5 => 850,
        7 => 2600,
        8 => 900,
        20 => 800,
        28 => 700,
        38 => 2600,
        40 => 2300,
        41 => 2500,
        _ => 0,
    }
}

/// Resolves an EARFCN straight to a center frequency in MHz.
pub fn lte_frequency(earfcn: i32) -> u32 {
    lte_band_frequency(lte_band(earfcn))
}

/// Resolves a UARFCN to its WCDMA band number.
pub fn wcdma_band(uarfcn: i32) -> u16 {
    match uarfcn {
        10562..=10838 => 1,
        9662..=9938 => 2,
        1162..=1513 => 3,
        1537..=1738 => 4,
        4357..=4458 => 5,
        // Band 6's range sits inside band 5's and first match wins, so this
        // arm is unreachable. Kept so the table reads like the source tables.
        #[allow(unreachable_patterns)]
        4387..=4413 => 6,
        2237..=2563 => 7,
        2937..=3088 => 8,
        _ => UNKNOWN_BAND,
    }
}

/// Fixed center frequency in MHz for a WCDMA band.
pub fn wcdma_band_frequency(band: u16) -> u32 {
    match band {
        1 => 2100,
        2 => 1900,
        3 => 1800,
        4 => 1700,
        5 => 850,
        8 => 900,
        _ => 0,
    }
}

/// Resolves a UARFCN straight to a center frequency in MHz.
pub fn wcdma_frequency(uarfcn: i32) -> u32 {
    wcdma_band_frequency(wcdma_band(uarfcn))
}

/// Approximate center frequency in MHz for an NRARFCN.
///
/// NR carries no named-band table here; the frequency is derived directly by
/// truncating integer division and the band is always reported as the fixed
/// "5G NR" label by callers. Negative channel numbers clamp to 0.
pub fn nr_frequency(nrarfcn: i32) -> u32 {
    if nrarfcn < 0 {
        return 0;
    }
    (nrarfcn / 1000) as u32
}
