//! Sample street segments for the demo.
//!
//! A handful of streets around the Technion campus in Haifa, the area the
//! flat-earth scale factors are calibrated for.  Points are millionths of a
//! degree; each entry is `(name, (lat, lon), (lat, lon))`.

use anyhow::Result;

use wr_geo::{GeoPoint, GeoSegment};

const SEGMENTS: &[(&str, (i32, i32), (i32, i32))] = &[
    ("Hankin Road",       (32_783_098, 35_014_162), (32_784_452, 35_016_210)),
    ("Hankin Road",       (32_784_452, 35_016_210), (32_785_105, 35_018_040)),
    ("Trumpeldor Avenue", (32_785_105, 35_018_040), (32_788_390, 35_020_110)),
    ("Trumpeldor Avenue", (32_788_390, 35_020_110), (32_791_730, 35_021_300)),
    ("Hagalil",           (32_791_730, 35_021_300), (32_790_880, 35_027_460)),
    ("Hagalil",           (32_790_880, 35_027_460), (32_789_110, 35_033_920)),
    ("Hanita",            (32_789_110, 35_033_920), (32_781_020, 35_031_050)),
    ("Hanita",            (32_781_020, 35_031_050), (32_772_690, 35_029_830)),
    ("Einstein Street",   (32_772_690, 35_029_830), (32_771_500, 35_024_400)),
];

/// The catalog as segments, in the order listed.
pub fn sample_segments() -> Result<Vec<GeoSegment>> {
    SEGMENTS
        .iter()
        .map(|&(name, (lat1, lon1), (lat2, lon2))| {
            Ok(GeoSegment::new(name, GeoPoint::new(lat1, lon1)?, GeoPoint::new(lat2, lon2)?))
        })
        .collect()
}
