use tera::Tera;

/// Registers every email and page template at startup. Templates are
/// compiled into the binary so the server has no runtime file lookups.
pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            "emails/invitation.html",
            include_str!("../../templates/emails/invitation.html"),
        ),
        (
            "emails/self_assessment.html",
            include_str!("../../templates/emails/self_assessment.html"),
        ),
        (
            "emails/report_ready.html",
            include_str!("../../templates/emails/report_ready.html"),
        ),
        (
            "pages/survey_form.html",
            include_str!("../../templates/pages/survey_form.html"),
        ),
        (
            "pages/leader_dashboard.html",
            include_str!("../../templates/pages/leader_dashboard.html"),
        ),
        (
            "pages/invalid_link.html",
            include_str!("../../templates/pages/invalid_link.html"),
        ),
        (
            "pages/thank_you.html",
            include_str!("../../templates/pages/thank_you.html"),
        ),
        (
            "pages/report.html",
            include_str!("../../templates/pages/report.html"),
        ),
    ])?;
    Ok(tera)
}
