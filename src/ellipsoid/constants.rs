// A few frequently used ellipsoids: Short name, semimajor axis, reciproque
// flattening, and a descriptive name.
#[rustfmt::skip]
pub(super) const ELLIPSOID_LIST: [(&str, f64, f64, &str); 6] = [
    ("GRS80",   6_378_137.0,    298.257_222_100_882_7, "GRS 1980(IUGG, 1980)"),
    ("WGS84",   6_378_137.0,    298.257_223_563,       "World Geodetic System 1984"),
    ("clrk66",  6_378_206.4,    294.978_698_2,         "Clarke 1866"),
    ("clrk80",  6_378_249.145,  293.465,               "Clarke 1880 (Morocco)"),
    ("intl",    6_378_388.0,    297.0,                 "International 1924 (Hayford 1909, 1910)"),
    ("bessel",  6_377_397.155,  299.152_812_8,         "Bessel 1841"),
];
