//! Closed-form relations of the model as symbolic expressions of a single variable, for
//! display and for numeric evaluation through `lambdify1D`.

use super::opacity::{AnalyticOpacity, Opacity};
use super::flux_limiter::FluxLimiter;
use super::rankine_hugoniot::{compression_ratio_sym, temperature_ratio_sym};
use RustedSciThe::symbolic::symbolic_engine::Expr;

/// One relation: what it describes, its argument, and the expression
#[derive(Debug, Clone)]
pub struct ClosedFormRelation {
    pub description: String,
    pub argument: String,
    pub expression: Expr,
}

impl ClosedFormRelation {
    fn new(description: &str, argument: &str, expression: Expr) -> Self {
        Self {
            description: description.to_string(),
            argument: argument.to_string(),
            expression,
        }
    }

    pub fn evaluate(&self, value: f64) -> f64 {
        self.expression.lambdify1D()(value)
    }
}

/// limiter, RH ratios for `gamma` and, for the analytic model, both opacity branches
pub fn closed_form_relations(gamma: f64, opacity: &Opacity) -> Vec<ClosedFormRelation> {
    let mut relations = vec![
        ClosedFormRelation::new("flux limiter lambda(R)", "R", FluxLimiter::limiter_sym()),
        ClosedFormRelation::new(
            "compression ratio rho2/rho1",
            "M",
            compression_ratio_sym(gamma),
        ),
        ClosedFormRelation::new(
            "temperature ratio T2/T1",
            "M",
            temperature_ratio_sym(gamma),
        ),
    ];
    if let Opacity::Analytic(model) = opacity {
        relations.extend(opacity_relations(model));
    }
    relations
}

fn opacity_relations(model: &AnalyticOpacity) -> Vec<ClosedFormRelation> {
    vec![
        ClosedFormRelation::new(
            &format!("opacity, T < {} K", model.T_break),
            "T",
            model.power_law_branch_sym(),
        ),
        ClosedFormRelation::new(
            &format!("opacity, T >= {} K", model.T_break),
            "T",
            model.exponential_branch_sym(),
        ),
    ]
}

pub fn pretty_print_relations(relations: &[ClosedFormRelation]) {
    use prettytable::{Cell, Row, Table, row};
    println!("____________________CLOSED-FORM RELATIONS_________________________");
    let mut table = Table::new();
    table.add_row(row!["Relation", "Argument", "Expression"]);
    for relation in relations {
        table.add_row(Row::new(vec![
            Cell::new(&relation.description),
            Cell::new(&relation.argument),
            Cell::new(&format!("{}", relation.expression)),
        ]));
    }
    table.printstd();
}
