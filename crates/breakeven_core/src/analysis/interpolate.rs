//! Break-even detection between adjacent sweep samples.
//!
//! Accuracy is that of a straight line between two neighbouring samples: the inserted
//! point is the x-intercept of the chord, not a root of the underlying formulas.

use tracing::trace;

use crate::model::AnalysisPoint;

fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Strictly one negative and one positive; a zero on either side is not a crossing.
fn opposite_signs(y1: f64, y2: f64) -> bool {
    if y1 == 0.0 || y2 == 0.0 || y1.is_nan() || y2.is_nan() {
        return false;
    }
    (y1 < 0.0) != (y2 < 0.0)
}

/// The zero crossing of the net-profit chord between two samples of strictly
/// opposite sign, or `None` when there is no crossing.
pub fn intercept(p1: &AnalysisPoint, p2: &AnalysisPoint) -> Option<AnalysisPoint> {
    let (x1, y1) = (p1.sales_percent, p1.net_profit);
    let (x2, y2) = (p2.sales_percent, p2.net_profit);
    if !opposite_signs(y1, y2) || x2 == x1 {
        return None;
    }

    let intercept_x = x1 - y1 * (x2 - x1) / (y2 - y1);
    let ratio = (intercept_x - x1) / (x2 - x1);

    let point = AnalysisPoint {
        sales_percent: intercept_x,
        sales_volume: lerp(p1.sales_volume, p2.sales_volume, ratio),
        inventory_volume: lerp(p1.inventory_volume, p2.inventory_volume, ratio),
        manufacturing_cost: lerp(p1.manufacturing_cost, p2.manufacturing_cost, ratio),
        sustainability_cost: lerp(p1.sustainability_cost, p2.sustainability_cost, ratio),
        total_cost: lerp(p1.total_cost, p2.total_cost, ratio),
        revenue: lerp(p1.revenue, p2.revenue, ratio),
        net_profit: 0.0,
        total_emissions: lerp(p1.total_emissions, p2.total_emissions, ratio),
        profit_positive: None,
        profit_negative: None,
        is_break_even: true,
    };
    Some(point.with_profit_split())
}

/// Walk raw samples in ascending percentage order and insert an intercept point before
/// every sample whose net profit has the opposite sign to its predecessor.
pub fn insert_break_even_points(raw: Vec<AnalysisPoint>) -> Vec<AnalysisPoint> {
    let mut series = Vec::with_capacity(raw.len() * 2);
    let mut previous: Option<AnalysisPoint> = None;

    for point in raw {
        if let Some(crossing) = previous.as_ref().and_then(|prev| intercept(prev, &point)) {
            trace!(sales_percent = crossing.sales_percent, "Break-even crossing");
            series.push(crossing);
        }
        series.push(point);
        previous = Some(point);
    }

    series
}

/// The interpolated crossing points of a series
pub fn break_even_points(series: &[AnalysisPoint]) -> Vec<&AnalysisPoint> {
    series.iter().filter(|p| p.is_break_even).collect()
}
