// Example: plot_price_curve.rs
// Plots Black-Scholes call and put prices against the underlying price, together
// with their discounted intrinsic values, for the reference contract.
//
// Usage:
//     cargo run --example plot_price_curve -- [volatility]
//
// The output image is written to price_curve.svg in the working directory.

use std::env;
use std::error::Error;

use bs_pricing_lib::{price_pair, ContractParams, DegeneratePolicy};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let mut base = ContractParams::reference();
    if let Some(vol) = env::args().nth(1) {
        base.asset_volatility = vol.parse()?;
    }
    let discounted_strike = base.discounted_strike();

    let spot_min = base.strike_price * 0.5;
    let spot_max = base.strike_price * 1.5;
    let steps = 200;

    let mut call_line = Vec::with_capacity(steps + 1);
    let mut put_line = Vec::with_capacity(steps + 1);
    let mut call_intrinsic = Vec::with_capacity(steps + 1);
    let mut put_intrinsic = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let spot = spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64);
        let contract = ContractParams {
            asset_price: spot,
            ..base
        };
        let prices = price_pair(&contract, DegeneratePolicy::IntrinsicLimit)?;
        call_line.push((spot, prices.call));
        put_line.push((spot, prices.put));
        call_intrinsic.push((spot, (spot - discounted_strike).max(0.0)));
        put_intrinsic.push((spot, (discounted_strike - spot).max(0.0)));
    }

    let y_max = call_line
        .iter()
        .chain(put_line.iter())
        .map(|&(_, p)| p)
        .fold(0.0_f64, f64::max)
        * 1.05;

    let root = SVGBackend::new("price_curve.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes prices | K={:.0}, σ={:.2}, T={:.2}y, r={:.2}%",
                base.strike_price,
                base.asset_volatility,
                base.time_to_expiration,
                base.risk_free_rate * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying price")
        .y_desc("Option price")
        .draw()?;

    chart
        .draw_series(LineSeries::new(call_line, RED.stroke_width(2)))?
        .label("call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(LineSeries::new(put_line, BLUE.stroke_width(2)))?
        .label("put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(LineSeries::new(call_intrinsic, RED.mix(0.4)))?;
    chart.draw_series(LineSeries::new(put_intrinsic, BLUE.mix(0.4)))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Chart saved to price_curve.svg");
    Ok(())
}
