use crate::types::descriptor::MarkerDescriptor;
use crate::types::workout::Coordinates;

pub trait MapView: Send {
    fn place_marker(&mut self, marker: &MarkerDescriptor);
    fn pan_to(&mut self, coordinates: Coordinates, zoom: u8);
    fn clear_markers(&mut self);
}

/// Keeps the map's view and markers so they can be served to a client.
#[derive(Debug, Clone, Default)]
pub struct RecordedMap {
    center: Option<Coordinates>,
    zoom: Option<u8>,
    markers: Vec<MarkerDescriptor>,
}

impl RecordedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Option<Coordinates> {
        self.center
    }

    pub fn zoom(&self) -> Option<u8> {
        self.zoom
    }

    pub fn markers(&self) -> &[MarkerDescriptor] {
        &self.markers
    }
}

impl MapView for RecordedMap {
    fn place_marker(&mut self, marker: &MarkerDescriptor) {
        self.markers.push(marker.clone());
    }

    fn pan_to(&mut self, coordinates: Coordinates, zoom: u8) {
        self.center = Some(coordinates);
        self.zoom = Some(zoom);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }
}
