//! Bundled all-sky reference catalog.
//!
//! 104 identified stars from the reference camera deployment: pixel
//! centroid positions in the all-sky frame paired with true horizontal
//! coordinates. Altitude and azimuth are stored sexagesimal as read off
//! the ephemeris and converted to decimal degrees at build time.

use crate::star::{sexagesimal_to_deg, Star};
use crate::starcatalog::StarCatalog;

/// name, pixel x, pixel y, altitude (d, m, s), azimuth (d, m, s)
type RawStar = (&'static str, f64, f64, (f64, f64, f64), (f64, f64, f64));

#[rustfmt::skip]
const REFERENCE_STARS: &[RawStar] = &[
    ("5 Lac",           789.0,  202.0,  (5.0, 16.0, 41.2),  (36.0, 57.0, 55.7)),
    ("HJ1796",          1047.0, 77.0,   (9.0, 48.0, 36.7),  (28.0, 56.0, 6.1)),
    ("21 Cep",          1065.0, 146.0,  (13.0, 37.0, 25.9), (30.0, 1.0, 48.8)),
    ("Erakis",          1079.0, 220.0,  (16.0, 10.0, 58.1), (30.0, 57.0, 9.4)),
    ("Alphirk",         1375.0, 195.0,  (22.0, 45.0, 24.9), (20.0, 27.0, 39.2)),
    ("Alahakan",        1685.0, 387.0,  (37.0, 7.0, 6.9),   (18.0, 0.0, 20.1)),
    ("Kochab",          2123.0, 435.0,  (44.0, 35.0, 33.1), (1.0, 25.0, 38.3)),
    ("Dubhe",           2819.0, 450.0,  (42.0, 27.0, 41.6), (329.0, 11.0, 36.2)),
    ("Giausar",         2584.0, 365.0,  (41.0, 45.0, 37.7), (340.0, 3.0, 48.9)),
    ("44 Lyn",          3038.0, 330.0,  (33.0, 25.0, 39.7), (321.0, 41.0, 44.8)),
    ("17 UMa",          3062.0, 260.0,  (29.0, 13.0, 44.8), (321.0, 43.0, 30.9)),
    ("Alhaud V",        3196.0, 370.0,  (30.0, 55.0, 29.9), (315.0, 30.0, 36.5)),
    ("Merak",           2953.0, 550.0,  (43.0, 44.0, 0.1),  (322.0, 2.0, 27.3)),
    ("Altheba IV",      2740.0, 105.0,  (29.0, 3.0, 32.0),  (334.0, 18.0, 52.6)),
    ("Deneb",           778.0,  638.0,  (18.0, 59.0, 11.8), (47.0, 57.0, 20.3)),
    ("o1 Cyg",          870.0,  706.0,  (24.0, 0.0, 38.6),  (48.0, 13.0, 34.5)),
    ("o2 Cyg",          883.0,  677.0,  (23.0, 59.0, 58.3), (47.0, 6.0, 29.3)),
    ("Grumium",         1485.0, 799.0,  (45.0, 31.0, 5.6),  (36.0, 22.0, 31.8)),
    ("Athebyne",        1850.0, 765.0,  (52.0, 38.0, 25.7), (21.0, 0.0, 53.3)),
    ("RR UMi",          2139.0, 655.0,  (52.0, 41.0, 32.0), (3.0, 43.0, 14.7)),
    ("Thuban",          2348.0, 650.0,  (54.0, 5.0, 2.1),   (354.0, 17.0, 47.8)),
    ("Edasich",         2060.0, 850.0,  (58.0, 37.0, 19.2), (12.0, 17.0, 17.7)),
    ("Mizar",           2554.0, 876.0,  (60.0, 53.0, 54.8), (338.0, 48.0, 37.1)),
    ("Alioth",          2650.0, 803.0,  (57.0, 26.0, 39.6), (333.0, 36.0, 32.9)),
    ("Phecda",          2885.0, 737.0,  (51.0, 37.0, 54.6), (321.0, 51.0, 28.1)),
    ("Tania Australis", 3384.0, 737.0,  (38.0, 0.0, 20.1),  (301.0, 56.0, 22.9)),
    ("Psi UMa",         3200.0, 832.0,  (46.0, 44.0, 46.8), (305.0, 35.0, 21.5)),
    ("Fawaris III",     401.0,  846.0,  (6.0, 51.0, 48.2),  (59.0, 1.0, 12.4)),
    ("Aljanah",         523.0,  871.0,  (13.0, 33.0, 8.2),  (58.0, 19.0, 16.8)),
    ("13 Lyr",          1053.0, 1005.0, (36.0, 52.0, 29.5), (54.0, 37.0, 6.2)),
    ("Eltanin",         1400.0, 935.0,  (46.0, 26.0, 12.5), (44.0, 2.0, 16.9)),
    ("Rastaban",        1512.0, 955.0,  (50.0, 7.0, 19.6),  (41.0, 16.0, 59.3)),
    ("Alkaid",          2520.0, 1062.0, (67.0, 34.0, 1.6),  (339.0, 23.0, 17.3)),
    ("13 Boo",          2424.0, 1082.0, (68.0, 42.0, 37.5), (347.0, 56.0, 7.7)),
    ("TU CVn",          2774.0, 1035.0, (63.0, 15.0, 31.7), (320.0, 16.0, 36.4)),
    ("Alula Borealis",  3385.0, 1143.0, (48.0, 2.0, 40.7),  (288.0, 37.0, 53.9)),
    ("Alpha Lyn",       3623.0, 640.0,  (24.0, 38.0, 46.3), (297.0, 7.0, 32.4)),
    ("Rasalas",         3747.0, 975.0,  (28.0, 17.0, 16.4), (285.0, 44.0, 28.4)),
    ("Algenubi",        3795.0, 1000.0, (26.0, 1.0, 42.0),  (284.0, 1.0, 47.7)),
    ("Alterf",          3828.0, 955.0,  (22.0, 43.0, 40.2), (284.0, 33.0, 50.3)),
    ("Algieba",         3737.0, 1148.0, (31.0, 54.0, 26.7), (276.0, 28.0, 54.1)),
    ("Regulus",         3780.0, 1255.0, (26.0, 7.0, 11.9),  (269.0, 35.0, 50.7)),
    ("Subra",           3955.0, 1335.0, (19.0, 14.0, 0.8),  (270.0, 51.0, 9.9)),
    ("Zosma",           3547.0, 1395.0, (43.0, 58.0, 31.9), (271.0, 24.0, 15.6)),
    ("Chertan",         3583.0, 1462.0, (42.0, 1.0, 19.7),  (264.0, 58.0, 13.7)),
    ("Denebola",        3453.0, 1538.0, (49.0, 11.0, 23.1), (258.0, 34.0, 3.2)),
    ("Cor Caroli",      2882.0, 1281.0, (67.0, 23.0, 34.3), (301.0, 19.0, 20.2)),
    ("AW CVn",          2623.0, 1490.0, (79.0, 13.0, 19.3), (304.0, 20.0, 6.9)),
    ("Xuange",          2468.0, 1240.0, (72.0, 18.0, 52.6), (349.0, 16.0, 55.1)),
    ("Seginus",         2370.0, 1423.0, (80.0, 27.0, 13.4), (356.0, 32.0, 35.7)),
    ("Nekkar",          2197.0, 1380.0, (77.0, 8.0, 24.8),  (23.0, 37.0, 46.5)),
    ("v2 Boo",          2032.0, 1375.0, (73.0, 13.0, 38.3), (39.0, 55.0, 5.2)),
    ("Sigma Her",       1875.0, 1180.0, (62.0, 24.0, 41.3), (52.0, 14.0, 40.1)),
    ("Eta Her",         1720.0, 1319.0, (61.0, 44.0, 58.9), (60.0, 26.0, 10.2)),
    ("Pi Her",          1436.0, 1410.0, (55.0, 40.0, 50.5), (65.0, 50.0, 47.1)),
    ("RBR 48",          1495.0, 1306.0, (56.0, 26.0, 35.3), (58.0, 36.0, 0.1)),
    ("Vega",            1050.0, 1187.0, (39.0, 39.0, 41.9), (61.0, 41.0, 1.1)),
    ("Delta2 Lyr",      946.0,  1189.0, (35.0, 55.0, 46.2), (63.0, 17.0, 55.0)),
    ("Eta Cyg",         660.0,  1112.0, (23.0, 25.0, 51.8), (61.0, 26.0, 0.1)),
    ("Albireo",         660.0,  1315.0, (26.0, 7.0, 31.4),  (70.0, 51.0, 1.1)),
    ("Sualocin",        288.0,  1305.0, (6.0, 42.0, 52.1),  (75.0, 21.0, 2.4)),
    ("Gamma Sge",       435.0,  1438.0, (16.0, 56.0, 36.9), (76.0, 33.0, 11.3)),
    ("13 Sge",          408.0,  1488.0, (15.0, 49.0, 7.2),  (78.0, 16.0, 22.9)),
    ("Anser",           626.0,  1410.0, (25.0, 22.0, 9.9),  (74.0, 26.0, 43.8)),
    ("Mu Her",          1188.0, 1615.0, (48.0, 6.0, 58.3),  (79.0, 24.0, 27.5)),
    ("Tarazed",         398.0,  1735.0, (15.0, 44.0, 17.6), (86.0, 14.0, 26.9)),
    ("Altair",          365.0,  1766.0, (13.0, 57.0, 6.2),  (87.0, 18.0, 34.0)),
    ("Rutilicus",       1600.0, 1607.0, (62.0, 39.0, 21.6), (76.0, 3.0, 24.9)),
    ("Thiba",           2130.0, 1593.0, (80.0, 12.0, 30.3), (59.0, 47.0, 41.2)),
    ("Nusakan",         2053.0, 1717.0, (78.0, 26.0, 5.2),  (85.0, 5.0, 23.8)),
    ("Alphecca",        2008.0, 1787.0, (76.0, 37.0, 56.9), (95.0, 14.0, 52.6)),
    ("Gamma CrB",       1955.0, 1798.0, (74.0, 47.0, 4.0),  (95.0, 17.0, 5.0)),
    ("Delta CrB",       1913.0, 1803.0, (73.0, 14.0, 11.8), (94.0, 47.0, 48.8)),
    ("Epsilon CrB",     1859.0, 1778.0, (71.0, 39.0, 27.4), (90.0, 55.0, 33.7)),
    ("Aulad Alnathlat", 2205.0, 1775.0, (83.0, 13.0, 51.4), (103.0, 51.0, 18.5)),
    ("Izar",            2332.0, 1763.0, (87.0, 12.0, 11.2), (126.0, 51.0, 12.1)),
    ("Rho Boo",         2405.0, 1655.0, (88.0, 16.0, 8.3),  (337.0, 4.0, 43.3)),
    ("Denebola",        3482.0, 1756.0, (49.0, 11.0, 10.3), (258.0, 34.0, 13.4)),
    ("Rho Leo",         3793.0, 1790.0, (30.0, 14.0, 42.0), (263.0, 48.0, 21.6)),
    ("24 Com A",        3195.0, 1788.0, (60.0, 45.0, 13.7), (255.0, 45.0, 27.9)),
    ("Arcturus",        2553.0, 1965.0, (79.0, 13.0, 52.0), (207.0, 54.0, 49.9)),
    ("Gudja",           1909.0, 2034.0, (70.0, 26.0, 16.9), (118.0, 54.0, 52.6)),
    ("Kornephoros",     1629.0, 1910.0, (63.0, 25.0, 13.7), (99.0, 20.0, 14.4)),
    ("Rasalgethi",      1304.0, 2057.0, (50.0, 25.0, 47.1), (102.0, 35.0, 7.5)),
    ("Rasalhague",      1160.0, 2070.0, (45.0, 38.0, 2.5),  (101.0, 50.0, 49.1)),
    ("72 Oph",          1160.0, 2070.0, (37.0, 13.0, 24.4), (100.0, 14.0, 12.9)),
    ("Alava",           805.0,  2392.0, (27.0, 15.0, 52.7), (110.0, 15.0, 33.5)),
    ("Kappa Oph",       1404.0, 2225.0, (51.0, 21.0, 7.4),  (112.0, 48.0, 41.4)),
    ("Unukalhai",       1934.0, 2366.0, (62.0, 17.0, 49.0), (140.0, 22.0, 18.6)),
    ("Minelova",        3153.0, 2265.0, (55.0, 20.0, 56.5), (227.0, 25.0, 2.6)),
    ("FW Vir",          3268.0, 2265.0, (51.0, 20.0, 9.1),  (231.0, 4.0, 29.0)),
    ("Porrima",         3253.0, 2364.0, (49.0, 23.0, 56.6), (226.0, 41.0, 9.1)),
    ("Zavijava",        3550.0, 2122.0, (42.0, 30.0, 2.6),  (242.0, 49.0, 8.6)),
    ("u Leo",           3630.0, 2146.0, (38.0, 12.0, 2.4),  (242.0, 59.0, 18.5)),
    ("e Leo",           3670.0, 2183.0, (35.0, 32.0, 40.2), (242.0, 9.0, 51.4)),
    ("p2 Leo",          3800.0, 2060.0, (30.0, 12.0, 9.6),  (247.0, 47.0, 22.0)),
    ("v Hya",           3825.0, 2391.0, (19.0, 38.0, 38.7), (237.0, 40.0, 50.0)),
    ("Delta Crt",       3695.0, 2380.0, (25.0, 57.0, 2.0),  (233.0, 43.0, 8.8)),
    ("Gamma Crt",       3706.0, 2464.0, (24.0, 53.0, 43.5), (230.0, 22.0, 47.2)),
    ("Xi Vir",          3274.0, 2535.0, (44.0, 0.0, 27.2),  (221.0, 14.0, 39.1)),
    ("Gienah",          3395.0, 2717.0, (32.0, 56.0, 8.3),  (219.0, 59.0, 29.7)),
    ("Minkar",          3398.0, 2825.0, (28.0, 2.0, 49.0),  (217.0, 47.0, 4.6)),
    ("Kraz",            3255.0, 2905.0, (30.0, 26.0, 23.1), (211.0, 56.0, 11.7)),
    ("Spica",           2960.0, 2718.0, (46.0, 45.0, 32.2), (204.0, 56.0, 10.8)),
];

/// Build the bundled reference catalog.
///
/// Construct once and keep re-querying it; every
/// [`observe_from`](StarCatalog::observe_from) call recomputes polar
/// coordinates against the supplied center.
pub fn reference_catalog() -> StarCatalog {
    StarCatalog::new(
        REFERENCE_STARS
            .iter()
            .map(|&(name, x, y, alt, az)| Star {
                name: name.to_string(),
                x,
                y,
                alt_deg: sexagesimal_to_deg(alt.0, alt.1, alt.2),
                az_deg: sexagesimal_to_deg(az.0, az.1, az.2),
            })
            .collect(),
    )
}
