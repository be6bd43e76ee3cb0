//! Feature extraction for the no-show prediction pipelines.
//!
//! Two CSV sources feed the model: the public hotel-booking dataset (hotel
//! columns mapped onto restaurant-shaped proxy features) and the
//! restaurant's own logged reservation outcomes (native features, no
//! engineering needed). Both produce fixed-length feature vectors paired
//! with a binary no-show label.

mod hotel;
mod io;
mod restaurant;

pub use hotel::{
    extract_hotel_samples, HotelBooking, HOTEL_FEATURE_COUNT, HOTEL_FEATURE_NAMES,
};
pub use io::{load_hotel_csv, load_restaurant_csv};
pub use restaurant::{
    extract_restaurant_samples, OutcomeCounts, RestaurantExtraction, RestaurantRow,
    RESTAURANT_FEATURE_COUNT, RESTAURANT_FEATURE_NAMES,
};

/// One training sample: a fixed feature vector and a binary outcome label
/// (1 = no-show / cancelled, 0 = attended).
#[derive(Debug, Clone)]
pub struct TrainingSample {
    pub features: Vec<f32>,
    pub label: u8,
}
