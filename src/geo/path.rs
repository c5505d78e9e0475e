use crate::geo::error::GeoError;
use crate::lat_long::LatitudeLongitude;

/// Below this central angle (radians, roughly 6 mm on the ground) both ends are treated as
/// the same point and no slerp weights are computed.
pub const ZERO_ANGLE_EPSILON: f64 = 1e-12;

/// Samples the great circle from `start` to `end` at `num_points` equal angular steps,
/// returning `num_points + 1` coordinates with `start` first and `end` last.
///
/// Points that are (nearly) antipodal have no unique great circle between them. The
/// result stays finite there, but the path it follows is not meaningful.
pub fn interpolate_great_circle(
    start: LatitudeLongitude,
    end: LatitudeLongitude,
    num_points: u32,
) -> Result<Vec<LatitudeLongitude>, GeoError> {
    if num_points < 1 {
        return Err(GeoError::InvalidSampleCount(num_points));
    }

    let angle = start.central_angle(&end);
    if angle < ZERO_ANGLE_EPSILON {
        return Ok(vec![start; num_points as usize + 1]);
    }

    let sin_angle = angle.sin();
    let [sx, sy, sz] = start.to_unit_vector();
    let [ex, ey, ez] = end.to_unit_vector();

    let mut points = Vec::with_capacity(num_points as usize + 1);
    points.push(start);
    for i in 1..num_points {
        let fraction = i as f64 / num_points as f64;
        let a = ((1.0 - fraction) * angle).sin() / sin_angle;
        let b = (fraction * angle).sin() / sin_angle;
        points.push(LatitudeLongitude::from_unit_vector([
            a * sx + b * ex,
            a * sy + b * ey,
            a * sz + b * ez,
        ]));
    }
    points.push(end);
    Ok(points)
}
