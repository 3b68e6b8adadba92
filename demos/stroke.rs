extern crate bezier_spline;

use bezier_spline::CurvePath;

fn main() {

    let values = [0.2, 0.6, 0.4, 0.3, 0.2];
    let path = CurvePath::from_values(&values, 300.0, 100.0).unwrap();

    let steps_per_segment = 10;

    println!("x;y");
    for index in 0..path.get_segments().len() {
        for step in 0..steps_per_segment {
            let t = step as f64 / steps_per_segment as f64;
            let point = path.evaluate(index, t).unwrap();
            println!("{:.2};{:.2}", point.x, point.y);
        }
    }
    let last = path.get_samples()[values.len() - 1];
    println!("{:.2};{:.2}", last.x, last.y);
}
