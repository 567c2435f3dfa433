/// Everything the machine needs from the command line: the program images to
/// load, in load order. Later images overwrite earlier ones where they
/// overlap.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub image_paths: Vec<String>,
}

impl Config {
    pub fn new(image_paths: Vec<String>) -> Self {
        Self { image_paths }
    }
}
