use serde::{Deserialize, Serialize};

/// Coordenada geográfica en el orden de Mapbox: `[lng, lat]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Par `[lng, lat]` tal como lo esperan `center` y GeoJSON
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order_is_lng_lat() {
        let riyadh = LngLat::new(46.6753, 24.7136);
        assert_eq!(riyadh.to_array(), [46.6753, 24.7136]);
        assert_eq!(LngLat::from([46.6753, 24.7136]), riyadh);
    }
}
