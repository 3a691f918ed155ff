//! Read-only presentation projections over a derived schedule.
//!
//! The table and chart views are two independent projections of the same
//! [`YieldSchedule`]. Neither owns anything beyond a borrow of the
//! schedule, so they always agree on the numbers they expose.

use serde::Serialize;

use crate::models::YieldSchedule;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnAlign {
    Left,
    Right,
}

/// Static description of one table column.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableColumn {
    pub field: &'static str,
    pub header: &'static str,
    pub align: ColumnAlign,
}

/// The three table columns, in render order. Sorting, filtering, and
/// column selection are not offered; the schedule's natural order is
/// authoritative.
pub const TABLE_COLUMNS: [TableColumn; 3] = [
    TableColumn {
        field: "period",
        header: "Period",
        align: ColumnAlign::Left,
    },
    TableColumn {
        field: "price",
        header: "Price",
        align: ColumnAlign::Right,
    },
    TableColumn {
        field: "revenue",
        header: "Revenue",
        align: ColumnAlign::Right,
    },
];

/// Tabular projection of a schedule.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    schedule: &'a YieldSchedule,
}

impl<'a> TableView<'a> {
    pub fn new(schedule: &'a YieldSchedule) -> Self {
        Self { schedule }
    }

    pub fn columns(&self) -> &'static [TableColumn; 3] {
        &TABLE_COLUMNS
    }

    /// Rows in natural schedule order, one `(period, price, revenue)`
    /// triple per point.
    pub fn rows(self) -> impl Iterator<Item = (u32, f64, f64)> + 'a {
        self.schedule.iter().map(|p| (p.period, p.price, p.revenue))
    }
}

/// Title shown above the chart, legend on top.
pub const CHART_TITLE: &str = "Price vs. Revenue";

/// One plotted series: fixed label and colors plus the y-values in period
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub values: Vec<f64>,
}

/// Line-chart projection of a schedule: two fixed series plotted against
/// the period index.
#[derive(Debug, Clone, Copy)]
pub struct ChartView<'a> {
    schedule: &'a YieldSchedule,
}

impl<'a> ChartView<'a> {
    pub fn new(schedule: &'a YieldSchedule) -> Self {
        Self { schedule }
    }

    /// X-axis labels: the period indices in order.
    pub fn labels(&self) -> Vec<u32> {
        self.schedule.iter().map(|p| p.period).collect()
    }

    /// The two plotted series, price first.
    pub fn series(&self) -> [ChartSeries; 2] {
        [
            ChartSeries {
                label: "Price",
                border_color: "rgb(255, 99, 132)",
                background_color: "rgba(255, 99, 132, 0.5)",
                values: self.schedule.iter().map(|p| p.price).collect(),
            },
            ChartSeries {
                label: "Revenue",
                border_color: "rgb(53, 162, 235)",
                background_color: "rgba(53, 162, 235, 0.5)",
                values: self.schedule.iter().map(|p| p.revenue).collect(),
            },
        ]
    }
}
