//! Universal Transverse Mercator projection.
//!
//! ETRS89 / UTM zone 32N (EPSG:25832) is the storage CRS for all usage
//! location geometries; its datum is close enough to WGS84 that the
//! ellipsoidal constants below apply to both. The forward and inverse
//! mappings follow the classic series expansions (Snyder, "Map Projections:
//! A Working Manual", USGS PP 1395), which are accurate to well below a
//! millimeter inside the zone.

/// UTM projection for a single northern-hemisphere zone.
///
/// All parameters are fixed at construction; instances are cheap, immutable
/// and safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct UtmZone {
    /// Central meridian in radians.
    lon0: f64,
    /// Semi-major axis (meters).
    a: f64,
    /// First eccentricity squared.
    e2: f64,
    /// Second eccentricity squared, `e² / (1 - e²)`.
    ep2: f64,
    /// Scale factor on the central meridian.
    k0: f64,
    /// False easting (meters).
    false_easting: f64,
}

/// WGS84 / GRS80 semi-major axis.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// UTM central-meridian scale factor.
const UTM_K0: f64 = 0.9996;
/// UTM false easting.
const UTM_FALSE_EASTING: f64 = 500_000.0;

impl UtmZone {
    /// Projection for an arbitrary northern UTM zone.
    pub fn zone(zone: u32) -> Self {
        let central_meridian_deg = (zone as f64) * 6.0 - 183.0;
        let e2 = WGS84_F * (2.0 - WGS84_F);
        Self {
            lon0: central_meridian_deg.to_radians(),
            a: WGS84_A,
            e2,
            ep2: e2 / (1.0 - e2),
            k0: UTM_K0,
            false_easting: UTM_FALSE_EASTING,
        }
    }

    /// Zone 32N, central meridian 9°E: the zone covering Lower Saxony.
    pub fn zone_32n() -> Self {
        Self::zone(32)
    }

    /// Meridional arc length from the equator to latitude `phi`.
    fn meridional_arc(&self, phi: f64) -> f64 {
        let e2 = self.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        self.a
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }

    /// Project geographic coordinates (degrees) to easting/northing.
    pub fn from_geographic(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let phi = lat_deg.to_radians();
        let lambda = lon_deg.to_radians();

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        let n = self.a / (1.0 - self.e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = self.ep2 * cos_phi * cos_phi;
        let a_term = (lambda - self.lon0) * cos_phi;

        let a2 = a_term * a_term;
        let a3 = a2 * a_term;
        let a4 = a3 * a_term;
        let a5 = a4 * a_term;
        let a6 = a5 * a_term;

        let m = self.meridional_arc(phi);

        let easting = self.k0
            * n
            * (a_term
                + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * self.ep2) * a5 / 120.0)
            + self.false_easting;

        let northing = self.k0
            * (m + n
                * tan_phi
                * (a2 / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * self.ep2) * a6 / 720.0));

        (easting, northing)
    }

    /// Unproject easting/northing to geographic coordinates (degrees),
    /// returned as `(longitude, latitude)`.
    pub fn to_geographic(&self, easting: f64, northing: f64) -> (f64, f64) {
        let e2 = self.e2;
        let x = easting - self.false_easting;

        // Footpoint latitude from the rectifying sphere.
        let m = northing / self.k0;
        let mu = m
            / (self.a
                * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
        let e1_2 = e1 * e1;
        let e1_3 = e1_2 * e1;
        let e1_4 = e1_3 * e1;

        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1_3 / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1_2 / 16.0 - 55.0 * e1_4 / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1_3 / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1_4 / 512.0) * (8.0 * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let c1 = self.ep2 * cos_phi1 * cos_phi1;
        let t1 = tan_phi1 * tan_phi1;
        let n1 = self.a / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
        let r1 = self.a * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
        let d = x / (n1 * self.k0);

        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let lat = phi1
            - (n1 * tan_phi1 / r1)
                * (d2 / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * self.ep2) * d4
                        / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * self.ep2
                        - 3.0 * c1 * c1)
                        * d6
                        / 720.0);

        let lon = self.lon0
            + (d - (1.0 + 2.0 * t1 + c1) * d3 / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * self.ep2
                    + 24.0 * t1 * t1)
                    * d5
                    / 120.0)
                / cos_phi1;

        (lon.to_degrees(), lat.to_degrees())
    }
}
