//! Plain-text views of the portfolio

use pipeline_model::{Milestone, Program, Study};
use pipeline_portfolio::{CurrentUser, DetailTab, PortfolioSummary, ProgramDetail};
use std::fmt::Write;

/// One line per program followed by the "Showing X of Y programs" footer
pub(crate) fn program_list(hits: &[&Program], total: usize) -> String {
    let mut out = String::new();
    for p in hits {
        let _ = writeln!(
            out,
            "{:<7} {:<9} {:<12} {:<20} {:<28} studies={} enrollment={}%",
            p.code,
            p.name,
            p.phase,
            p.therapeutic_area,
            p.indication,
            p.studies.len(),
            p.enrollment_percent(),
        );
    }
    if hits.is_empty() {
        out.push_str("No programs match the current search and filters.\n");
    }
    let _ = writeln!(out, "Showing {} of {total} programs", hits.len());
    out
}

/// Header, tab bar and the active tab of a program's detail view
pub(crate) fn program_detail(detail: &ProgramDetail<'_>, user: &CurrentUser) -> String {
    let p = detail.program();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})  [{}]", p.name, p.code, p.phase);
    let _ = writeln!(out, "{}", p.description);
    if user.can_edit() {
        let _ = writeln!(out, "Edit available to {} ({})", user.name, user.role);
    }

    let tabs: Vec<String> = detail
        .tab_labels()
        .into_iter()
        .map(|(tab, label)| {
            if tab == detail.tab() {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("  "));
    out.push('\n');

    match detail.tab() {
        DetailTab::Overview => overview(&mut out, detail),
        DetailTab::Studies => {
            for study in &p.studies {
                study_card(&mut out, study);
            }
        }
        DetailTab::Milestones => {
            let _ = writeln!(out, "Program Timeline");
            timeline(&mut out, &detail.overall_timeline());
            for (study, milestones) in detail.study_timelines() {
                let _ = writeln!(out, "\n{}", study.name);
                timeline(&mut out, &milestones);
            }
        }
    }
    out
}

fn overview(out: &mut String, detail: &ProgramDetail<'_>) {
    let p = detail.program();
    let m = detail.key_metrics();
    let _ = writeln!(out, "Therapeutic Area: {}", p.therapeutic_area);
    let _ = writeln!(out, "Indication:       {}", p.indication);
    let _ = writeln!(out, "Mechanism:        {}", p.mechanism);
    let _ = writeln!(out, "Project Lead:     {}", p.project_lead);
    let _ = writeln!(out, "Start Date:       {}", p.start_date);
    let _ = writeln!(out, "Last Updated:     {}", p.last_updated);
    out.push('\n');
    let _ = writeln!(
        out,
        "Enrollment:  {} / {} ({}%)",
        m.total_enrollment,
        p.target_enrollment(),
        p.enrollment_percent()
    );
    let _ = writeln!(out, "Active Studies:     {}", m.active_studies);
    let _ = writeln!(out, "Completed Studies:  {}", m.completed_studies);
    let _ = writeln!(
        out,
        "Milestones:         {} / {} completed",
        m.completed_milestones, m.total_milestones
    );
}

fn study_card(out: &mut String, study: &Study) {
    let _ = writeln!(out, "{} ({})  [{}]", study.name, study.id, study.status);
    let _ = writeln!(out, "  {} / {}", study.study_type, study.phase);
    let _ = writeln!(
        out,
        "  Enrollment: {} / {} ({}%)",
        study.current_enrollment,
        study.target_enrollment,
        study.enrollment_percent()
    );
    let _ = writeln!(out, "  Sites: {}", study.sites);
    let _ = writeln!(out, "  Principal Investigator: {}", study.principal_investigator);
    let _ = writeln!(
        out,
        "  {} to {}",
        study.start_date, study.expected_completion_date
    );
}

fn timeline(out: &mut String, milestones: &[&Milestone]) {
    for m in milestones {
        let _ = write!(out, "  {:<12} {:<24} Target: {}", m.status, m.name, m.target_date);
        if let Some(actual) = m.actual_date {
            let _ = write!(out, "  Actual: {actual}");
        }
        out.push('\n');
    }
}

/// Portfolio-wide counts
pub(crate) fn summary(s: &PortfolioSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Programs:             {}", s.programs);
    let _ = writeln!(out, "Studies:              {}", s.studies);
    let _ = writeln!(out, "Total Enrollment:     {}", s.total_enrollment);
    let _ = writeln!(out, "Active Studies:       {}", s.active_studies);
    let _ = writeln!(out, "Completed Studies:    {}", s.completed_studies);
    let _ = writeln!(
        out,
        "Milestones Completed: {} / {}",
        s.completed_milestones, s.total_milestones
    );
    let _ = writeln!(out, "\nBy phase");
    for (phase, n) in &s.by_phase {
        let _ = writeln!(out, "  {:<16} {n}", phase.to_string());
    }
    let _ = writeln!(out, "\nBy therapeutic area");
    for (area, n) in &s.by_area {
        let _ = writeln!(out, "  {:<20} {n}", area.to_string());
    }
    out
}
