use hueset::image::io::Reader as ImageReader;

fn main() {
    let reader = ImageReader::open("ab67616d0000b2732cd7888600aafe2eb8b6be9f.jpg").unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = hueset::PaletteBuilder::from_image(buf)
        .quantization_factor(16)
        .max_colors(5)
        .generate()
        .unwrap();

    println!("{:#?}", palette);
}
