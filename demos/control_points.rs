extern crate bezier_spline;

use bezier_spline::{solve, Point};

fn main() {

    let samples = vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, -1.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 3.0),
        Point::new(4.0, 1.0),
        Point::new(5.0, 1.0)
    ];

    let segments = solve(&samples).unwrap();

    println!("x0;y0;c1x;c1y;c2x;c2y;x1;y1");
    for (i, segment) in segments.iter().enumerate() {
        let start = samples[i];
        let end = samples[i + 1];
        let control1 = segment.get_control1();
        let control2 = segment.get_control2();
        println!(
            "{:.2};{:.2};{:.2};{:.2};{:.2};{:.2};{:.2};{:.2}",
            start.x, start.y, control1.x, control1.y, control2.x, control2.y, end.x, end.y
        );
    }
}
