use std::{env, process};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: hueset <image>");
            process::exit(2);
        }
    };

    let image = match hueset::image::open(&path) {
        Ok(image) => image.to_rgba8(),
        Err(e) => {
            eprintln!("could not load {}: {}", path, e);
            process::exit(1);
        }
    };

    let palette = match hueset::PaletteBuilder::from_image(image).generate() {
        Ok(palette) => palette,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    for swatch in palette.swatches() {
        println!("{}  population {:>5}  impact {:>8.1}", swatch.hex(), swatch.population(), swatch.impact());
    }

    println!();

    for (theme, colors) in palette.themes().iter() {
        println!("{:<20} {}", theme, colors.join(" "));
    }
}
