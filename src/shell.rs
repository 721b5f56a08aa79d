//! Menu state and view dispatch.
//!
//! A [`Shell`] owns the currently selected [`View`]. Every selection runs the
//! view's aggregation against the shared [`Dataset`] and renders a fresh page;
//! nothing is cached between visits.

use anyhow::{Result, bail};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::analyzers::{self, Summary};
use crate::loader::{DailyRecord, Dataset, Logo};
use crate::render::{self, page::NavEntry};

/// The four menu entries, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Overview,
    WeatherAnalysis,
    UserPatternAnalysis,
    AdvancedAnalysis,
}

/// Aggregation and heading for one view.
struct Route {
    heading: &'static str,
    aggregate: fn(&[DailyRecord]) -> Summary,
}

static ROUTES: [Route; 4] = [
    Route {
        heading: "Bike Sharing Dashboard (2011–2012)",
        aggregate: |rows| Summary::Overview(analyzers::overview(rows)),
    },
    Route {
        heading: "Weather Impact on Bike Rentals",
        aggregate: |rows| Summary::Weather(analyzers::weather(rows)),
    },
    Route {
        heading: "User Pattern: Casual vs Registered",
        aggregate: |rows| Summary::UserPattern(analyzers::user_pattern(rows)),
    },
    Route {
        heading: "Demand Grouping",
        aggregate: |rows| Summary::Demand(analyzers::demand(rows)),
    },
];

impl View {
    pub const ALL: [View; 4] = [
        View::Overview,
        View::WeatherAnalysis,
        View::UserPatternAnalysis,
        View::AdvancedAnalysis,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::WeatherAnalysis => "Weather Analysis",
            View::UserPatternAnalysis => "User Pattern Analysis",
            View::AdvancedAnalysis => "Advanced Analysis",
        }
    }

    /// Short name used on the command line and for page file names.
    pub fn slug(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::WeatherAnalysis => "weather",
            View::UserPatternAnalysis => "user-pattern",
            View::AdvancedAnalysis => "advanced",
        }
    }

    pub fn heading(self) -> &'static str {
        self.route().heading
    }

    pub fn file_name(self) -> String {
        format!("{}.html", self.slug())
    }

    fn route(self) -> &'static Route {
        &ROUTES[self as usize]
    }

    /// Runs this view's aggregation.
    pub fn summarize(self, rows: &[DailyRecord]) -> Summary {
        (self.route().aggregate)(rows)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = anyhow::Error;

    /// Accepts either the sidebar label or the slug, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        match View::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(wanted) || v.slug().eq_ignore_ascii_case(wanted))
        {
            Some(view) => Ok(view),
            None => {
                let valid: Vec<&str> = View::ALL.iter().map(|v| v.slug()).collect();
                bail!("unknown view '{wanted}', expected one of: {}", valid.join(", "))
            }
        }
    }
}

/// How sidebar entries link to other views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linking {
    /// Plain menu; selection happens outside the page.
    #[default]
    Inline,
    /// Each entry links to its sibling `<slug>.html`.
    Files,
}

/// Output of one visit to a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub view: View,
    pub summary: Summary,
    pub html: String,
}

pub struct Shell<'a> {
    dataset: &'a Dataset,
    logo: &'a Logo,
    linking: Linking,
    current: View,
}

impl<'a> Shell<'a> {
    pub fn new(dataset: &'a Dataset, logo: &'a Logo) -> Self {
        Self {
            dataset,
            logo,
            linking: Linking::default(),
            current: View::default(),
        }
    }

    pub fn with_linking(mut self, linking: Linking) -> Self {
        self.linking = linking;
        self
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switches to `view` and renders it from the base tables.
    #[tracing::instrument(skip_all, fields(view = %view))]
    pub fn select(&mut self, view: View) -> Result<Rendered> {
        self.current = view;
        let summary = view.summarize(&self.dataset.day);
        debug!(?summary, "View aggregated");

        let content = render::section(&summary)?;
        let html = render::page::render_page(view.heading(), &self.nav(), self.logo, &content);
        info!(bytes = html.len(), "View rendered");

        Ok(Rendered {
            view,
            summary,
            html,
        })
    }

    /// Re-renders the current view.
    pub fn refresh(&mut self) -> Result<Rendered> {
        self.select(self.current)
    }

    fn nav(&self) -> Vec<NavEntry> {
        View::ALL
            .iter()
            .map(|&v| NavEntry {
                label: v.label(),
                href: match self.linking {
                    Linking::Inline => None,
                    Linking::Files => Some(v.file_name()),
                },
                active: v == self.current,
            })
            .collect()
    }

    /// Renders the current view, then one view per input line until EOF or
    /// `quit`. Lines that name no view are logged and leave the state as is.
    ///
    /// Returns the number of pages rendered.
    pub fn browse<R, F>(&mut self, input: R, mut on_render: F) -> Result<usize>
    where
        R: BufRead,
        F: FnMut(&Rendered) -> Result<()>,
    {
        let mut pages = 0;
        on_render(&self.refresh()?)?;
        pages += 1;

        for line in input.lines() {
            let line = line?;
            let choice = line.trim();
            if choice.is_empty() {
                continue;
            }
            if matches!(choice, "q" | "quit" | "exit") {
                break;
            }

            match choice.parse::<View>() {
                Ok(view) => {
                    on_render(&self.select(view)?)?;
                    pages += 1;
                }
                Err(e) => warn!(input = choice, error = %e, "Ignoring selection"),
            }
        }

        Ok(pages)
    }
}
