use hueset::{image, ExtractionSession, PaletteError, Theme};

// decoding is the caller's business, the session only makes sure a single extraction runs at a time
fn decode(path: &str) -> Result<image::RgbaImage, image::ImageError> {
    Ok(image::open(path)?.to_rgba8())
}

fn main() {
    let mut session = ExtractionSession::default();

    let request = session.begin().unwrap();

    // a second upload while the first is still decoding is turned away
    match session.begin() {
        Err(PaletteError::Busy) => println!("busy, try again later"),
        other => println!("unexpected: {:?}", other),
    }

    match session.complete(request, decode("ab67616d0000b2732cd7888600aafe2eb8b6be9f.jpg")) {
        Ok(palette) => {
            println!("{:?}", palette.hex_colors());
            println!("{:?}", palette.theme(Theme::Analogous));
        }
        Err(e) => println!("{}", e.user_message()),
    }
}
