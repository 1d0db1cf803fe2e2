// File: crates/demo/src/main.rs
// Summary: Demo loads trade records (CSV or built-in sample) and renders two grids
// sharing one dimension, before and after a filter change, to HTML files.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use grid_core::{descending, ChartRegistry, DataGrid, Dimension, Key, MemoryDimension, Surface};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Trade {
    symbol: String,
    side: String,
    price: f64,
    quantity: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let trades = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let trades = load_trades_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} trades from {}", trades.len(), path.display());
            trades
        }
        None => {
            let trades = sample_trades();
            println!("No CSV given; using {} built-in sample trades", trades.len());
            trades
        }
    };
    // one shared dimension, ranked by notional value descending
    let dim = Rc::new(MemoryDimension::new(trades, |a: &Trade, b: &Trade| {
        (b.price * b.quantity).total_cmp(&(a.price * a.quantity))
    }));
    anyhow::ensure!(!dim.is_empty(), "no trades loaded");
    log::info!("dimension holds {} trades", dim.len());

    // grid 1: trades sectioned by symbol, largest first
    let mut by_symbol = DataGrid::new("by-symbol", Rc::clone(&dim) as Rc<dyn Dimension<Trade>>);
    by_symbol
        .set_section(|t: &Trade| Key::from(t.symbol.as_str()))
        .set_sort_by(|t: &Trade| Key::from(t.price * t.quantity))
        .set_order(descending)
        .set_size(50)
        .set_html(|t: &Trade| {
            format!(
                "<span class=\"side-{}\">{} {:.4} @ {:.2}</span>",
                t.side, t.side, t.quantity, t.price
            )
        })
        .set_html_section(|key, values| format!("<h1>{key} ({} trades)</h1>", values.len()));

    // grid 2: top 10 trades by side, default item renderer on purpose
    let mut by_side = DataGrid::new("by-side", Rc::clone(&dim) as Rc<dyn Dimension<Trade>>);
    by_side
        .set_section(|t: &Trade| Key::from(t.side.as_str()))
        .set_sort_by(|t: &Trade| Key::from(t.price))
        .set_begin_slice(0)
        .set_end_slice(Some(10));

    let mut registry = ChartRegistry::new();
    registry.register(Some("trades"), Rc::new(RefCell::new(by_symbol)));
    registry.register(Some("trades"), Rc::new(RefCell::new(by_side)));

    let mut surface = Surface::with_anchors(&["by-symbol", "by-side"]);
    registry.render_all(Some("trades"), &mut surface)?;
    write_page(&surface, "target/demo_out/grid_all.html")?;

    // filter: buys only, then group-wide redraw
    dim.filter(|t| t.side == "buy");
    log::info!("applied buy-side filter; redrawing group");
    registry.redraw_all(Some("trades"), &mut surface)?;
    write_page(&surface, "target/demo_out/grid_buys.html")?;

    Ok(())
}

fn load_trades_csv(path: &Path) -> Result<Vec<Trade>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize() {
        let trade: Trade = row?;
        out.push(trade);
    }
    Ok(out)
}

fn sample_trades() -> Vec<Trade> {
    let raw: &[(&str, &str, f64, f64)] = &[
        ("BTCUSD", "buy", 64_210.5, 0.25),
        ("BTCUSD", "sell", 64_180.0, 1.10),
        ("ETHUSD", "buy", 3_150.2, 4.00),
        ("ETHUSD", "buy", 3_148.9, 0.75),
        ("ETHUSD", "sell", 3_151.0, 2.50),
        ("SOLUSD", "sell", 142.7, 120.00),
        ("SOLUSD", "buy", 142.9, 35.00),
        ("BTCUSD", "buy", 64_250.0, 0.05),
    ];
    raw.iter()
        .map(|&(symbol, side, price, quantity)| Trade {
            symbol: symbol.to_owned(),
            side: side.to_owned(),
            price,
            quantity,
        })
        .collect()
}

fn write_page(surface: &Surface, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let page = format!("<!DOCTYPE html>\n<html>{}</html>\n", surface.to_html());
    std::fs::write(path, page)?;
    println!("Wrote {}", path.display());
    Ok(())
}
