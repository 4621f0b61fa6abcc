//! Demo: YouTube URL conversion
//!
//! Run with: cargo run -p ytconv-core --example convert_demo

use ytconv_core::{convert_youtube_url, normalize_url, recognize_str};

fn main() {
    let test_urls = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ?t=30",
        "https://www.youtube.com/shorts/abc123def45",
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLrAXtmRdnEQy&index=2",
        "youtu.be/dQw4w9WgXcQ",
        "https://vimeo.com/123456789",
        "https://www.youtube.com/playlist?list=PLrAXtmRdnEQy",
    ];

    for url in test_urls {
        println!("\n{}", "=".repeat(60));
        println!("INPUT: {}", url);
        println!("{}", "=".repeat(60));

        let normalized = normalize_url(url);
        if let Some(recognized) = recognize_str(&normalized) {
            println!("shape: {}, video_id: {}", recognized.shape, recognized.video_id);
        }

        let result = convert_youtube_url(&normalized);
        println!(
            "{}",
            result
                .to_json()
                .expect("serialization should be infallible")
        );
    }
}
