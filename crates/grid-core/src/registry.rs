// File: crates/grid-core/src/registry.rs
// Summary: Named chart groups with group-wide render/redraw broadcast.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use crate::error::GridError;
use crate::grid::DataGrid;
use crate::surface::Surface;

/// Group used when a chart is registered without naming one.
pub const DEFAULT_GROUP: &str = "__default__";

/// Object-safe view of a chart so heterogeneous record types share a group.
pub trait GridChart {
    fn anchor(&self) -> &str;
    fn render(&mut self, surface: &mut Surface) -> Result<(), GridError>;
    fn redraw(&mut self, surface: &mut Surface) -> Result<(), GridError>;
}

impl<R: Serialize> GridChart for DataGrid<R> {
    fn anchor(&self) -> &str {
        DataGrid::anchor(self)
    }

    fn render(&mut self, surface: &mut Surface) -> Result<(), GridError> {
        DataGrid::render(self, surface)
    }

    fn redraw(&mut self, surface: &mut Surface) -> Result<(), GridError> {
        DataGrid::redraw(self, surface)
    }
}

/// Shared, interior-mutable handle to a registered chart.
pub type ChartHandle = Rc<RefCell<dyn GridChart>>;

/// Registry of chart instances keyed by group name. Broadcasts run
/// synchronously in registration order and stop at the first error.
#[derive(Default)]
pub struct ChartRegistry {
    groups: HashMap<String, Vec<ChartHandle>>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chart under `group` (or the default group) and hand back a
    /// shared handle for later deregistration.
    pub fn register(&mut self, group: Option<&str>, chart: ChartHandle) -> ChartHandle {
        let name = group.unwrap_or(DEFAULT_GROUP);
        self.groups
            .entry(name.to_owned())
            .or_default()
            .push(Rc::clone(&chart));
        chart
    }

    pub fn deregister(&mut self, group: Option<&str>, chart: &ChartHandle) {
        let name = group.unwrap_or(DEFAULT_GROUP);
        if let Some(charts) = self.groups.get_mut(name) {
            charts.retain(|c| !Rc::ptr_eq(c, chart));
        }
    }

    pub fn clear(&mut self, group: Option<&str>) {
        self.groups.remove(group.unwrap_or(DEFAULT_GROUP));
    }

    /// Handles registered under `group`, in registration order.
    pub fn list(&self, group: Option<&str>) -> &[ChartHandle] {
        self.groups
            .get(group.unwrap_or(DEFAULT_GROUP))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of charts registered under `group`.
    pub fn count(&self, group: Option<&str>) -> usize {
        self.groups
            .get(group.unwrap_or(DEFAULT_GROUP))
            .map_or(0, Vec::len)
    }

    pub fn render_all(&self, group: Option<&str>, surface: &mut Surface) -> Result<(), GridError> {
        self.broadcast(group, surface, |chart, surface| chart.render(surface))
    }

    pub fn redraw_all(&self, group: Option<&str>, surface: &mut Surface) -> Result<(), GridError> {
        self.broadcast(group, surface, |chart, surface| chart.redraw(surface))
    }

    fn broadcast(
        &self,
        group: Option<&str>,
        surface: &mut Surface,
        op: impl Fn(&mut dyn GridChart, &mut Surface) -> Result<(), GridError>,
    ) -> Result<(), GridError> {
        let name = group.unwrap_or(DEFAULT_GROUP);
        let Some(charts) = self.groups.get(name) else {
            return Ok(());
        };
        log::debug!("broadcasting to {} chart(s) in group '{name}'", charts.len());
        for chart in charts {
            op(&mut *chart.borrow_mut(), surface)?;
        }
        Ok(())
    }
}
