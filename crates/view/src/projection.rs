use caster_physics::angle::{clamp_value_to_range, map_value_to_range};

use crate::RaySample;

/// One vertical strip of the rendered view, centered on the horizon.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Column {
    pub height: u32,
    /// Grayscale, 255 being white.
    pub brightness: u8,
}

impl Column {
    pub const EMPTY: Column = Column {
        height: 0,
        brightness: 0,
    };

    /// Size and shade a wall `distance` away.
    ///
    /// Height and brightness fall linearly from full at distance 0 to nothing at `view_distance` and beyond.
    pub fn at_distance(distance: f64, view_distance: f64, surface_height: u32) -> Column {
        if view_distance <= 0.0 || distance >= view_distance {
            return Column::EMPTY;
        }
        let distance = distance.max(0.0);

        let max_height = surface_height as f64;
        let height = map_value_to_range(distance, 0.0, view_distance, max_height, 0.0);
        let brightness = map_value_to_range(distance, 0.0, view_distance, 255.0, 0.0);

        Column {
            height: clamp_value_to_range(height, 0.0, max_height) as u32,
            brightness: clamp_value_to_range(brightness, 0.0, 255.0) as u8,
        }
    }

    /// Project a sample using its view-axis distance.  Samples which hit nothing draw nothing.
    pub fn from_sample(sample: &RaySample, view_distance: f64, surface_height: u32) -> Column {
        sample
            .hit
            .map(|h| Column::at_distance(h.projected_distance, view_distance, surface_height))
            .unwrap_or(Column::EMPTY)
    }

    /// Top row of this column on a surface `surface_height` rows tall, counting down from the top.
    pub fn top_row(&self, surface_height: u32) -> u32 {
        (surface_height / 2).saturating_sub(self.height / 2)
    }
}
