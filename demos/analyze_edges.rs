use std::collections::HashMap;

/// Summarizes an RGBA edge TIFF written by `yuv-edges`.
///
/// Usage: cargo run --example analyze_edges -- [edges.tiff]
fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "edges.tiff".to_string());
    let mut decoder = tiff::decoder::Decoder::new(std::fs::File::open(&path)?)?;
    let (width, height) = decoder.dimensions()?;

    println!("Image: {}x{} pixels", width, height);

    let image = decoder.read_image()?;

    if let tiff::decoder::DecodingResult::U8(data) = image {
        let mut values = HashMap::new();
        let mut edges = 0u64;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0u32, 0u32);

        for (i, px) in data.chunks_exact(4).enumerate() {
            *values.entry(px[0]).or_insert(0u64) += 1;
            if px[0] == 255 {
                edges += 1;
                let x = i as u32 % width;
                let y = i as u32 / width;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }

        let total_pixels = width as u64 * height as u64;
        println!("\nEdge pixels: {} ({:.2}%)", edges, edges as f64 / total_pixels as f64 * 100.0);
        if edges > 0 {
            println!("Bounding box: ({}, {}) - ({}, {})", min_x, min_y, max_x, max_y);
        }

        let unexpected: Vec<_> = values.keys().filter(|&&v| v != 0 && v != 255).collect();
        if unexpected.is_empty() {
            println!("Mask is binary");
        } else {
            println!("Non-binary intensities present: {:?}", unexpected);
        }
    } else {
        println!("Not an 8-bit image!");
    }

    Ok(())
}
