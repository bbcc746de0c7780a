//! Semantic model of a premium-payment schedule.
//!
//! A schedule is an ordered slice of [`DataPoint`]s. Order is significant: it
//! is the x-axis order of the chart.

use serde::Deserialize;

use paytrail_core::identifier::Id;

/// Prefix marking a `year` value as an age ("A60" reads "at age 60").
const AGE_MARKER: char = 'A';

/// A single caller-supplied point of the schedule.
///
/// All fields except `id` are optional. Points deserialize from TOML/JSON
/// tables using snake_case keys.
///
/// # Examples
///
/// ```
/// use paytrail::semantic::DataPoint;
///
/// let point = DataPoint::new("90")
///     .with_year("A90")
///     .with_major(true)
///     .with_value("150,000")
///     .with_last_payment(true);
///
/// assert!(point.is_age_marked());
/// assert_eq!(point.axis_caption().as_deref(), Some("90"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataPoint {
    id: Id,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    major: bool,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    level: Option<i32>,
    #[serde(default)]
    amount_label: Option<String>,
    #[serde(default)]
    last_payment: bool,
    #[serde(default)]
    divide_sa: bool,
}

impl DataPoint {
    /// Creates a point carrying only its id.
    pub fn new(id: &str) -> Self {
        Self {
            id: Id::new(id),
            label: None,
            note: None,
            major: false,
            value: None,
            year: None,
            level: None,
            amount_label: None,
            last_payment: false,
            divide_sa: false,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_major(mut self, major: bool) -> Self {
        self.major = major;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_year(mut self, year: &str) -> Self {
        self.year = Some(year.to_string());
        self
    }

    /// Sets the stacking tier of the amount caption.
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_amount_label(mut self, amount_label: &str) -> Self {
        self.amount_label = Some(amount_label.to_string());
        self
    }

    pub fn with_last_payment(mut self, last_payment: bool) -> Self {
        self.last_payment = last_payment;
        self
    }

    pub fn with_divide_sa(mut self, divide_sa: bool) -> Self {
        self.divide_sa = divide_sa;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Milestone flag.
    pub fn is_major(&self) -> bool {
        self.major
    }

    /// Formatted display value shown in tooltips and the terminal callout.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn level(&self) -> Option<i32> {
        self.level
    }

    pub fn amount_label(&self) -> Option<&str> {
        self.amount_label.as_deref()
    }

    /// Whether this point marks the final premium payment.
    pub fn is_last_payment(&self) -> bool {
        self.last_payment
    }

    /// Whether the sum assured is split at this point. Carried for renderers
    /// that draw tiered amount captions; the built-in planner does not use it.
    pub fn divides_sum_assured(&self) -> bool {
        self.divide_sa
    }

    /// Returns true if `year` encodes an age rather than a policy year.
    pub fn is_age_marked(&self) -> bool {
        self.year.as_deref().is_some_and(|y| y.contains(AGE_MARKER))
    }

    /// Caption drawn under the point: the year with its age marker removed,
    /// falling back to the label.
    pub fn axis_caption(&self) -> Option<String> {
        match self.year.as_deref() {
            Some(year) => Some(year.replacen(AGE_MARKER, "", 1)),
            None => self.label.clone(),
        }
    }
}

/// The ten-point premium schedule used when no data is supplied to the CLI.
///
/// Six policy-year points are followed by four age milestones; the last one
/// carries the final payment value.
pub fn sample_schedule() -> Vec<DataPoint> {
    let years = ["1", "2", "5", "10", "15", "20"];
    let ages = ["60", "70", "80", "90"];

    let mut points: Vec<DataPoint> = years
        .iter()
        .map(|year| DataPoint::new(year).with_label(year).with_year(year))
        .collect();

    points.extend(ages.iter().map(|age| {
        DataPoint::new(age)
            .with_major(true)
            .with_year(&format!("{AGE_MARKER}{age}"))
    }));

    if let Some(last) = points.pop() {
        points.push(last.with_value("150,000").with_last_payment(true));
    }

    points
}
