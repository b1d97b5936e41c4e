/// First photo returned by an image lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResult {
    pub image_url: String,
    pub photographer_name: String,
    pub photographer_link: String,
}

impl ImageResult {
    pub fn new(image_url: String, photographer_name: String, photographer_link: String) -> Self {
        Self {
            image_url,
            photographer_name,
            photographer_link,
        }
    }
}
