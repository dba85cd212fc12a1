//! Turns a [`UserProfile`] into the instruction sent to the model.

use crate::models::UserProfile;

/// Body Mass Index from weight in kg and height in cm, both as typed.
///
/// `None` when either value is blank or not a number, when the height is not
/// positive, or when the result is not finite.
pub fn calculate_bmi(weight_kg: &str, height_cm: &str) -> Option<f64> {
    let weight: f64 = weight_kg.trim().parse().ok()?;
    let height_m = height_cm.trim().parse::<f64>().ok()? / 100.0;
    if !height_m.is_finite() || height_m <= 0.0 {
        return None;
    }

    let bmi = weight / (height_m * height_m);
    bmi.is_finite().then_some(bmi)
}

/// BMI rendered to one decimal place, if it can be derived.
pub fn format_bmi(profile: &UserProfile) -> Option<String> {
    calculate_bmi(&profile.weight, &profile.height).map(|bmi| format!("{:.1}", bmi))
}

/// Build the consultation prompt for `profile`.
///
/// Profile fields are inserted verbatim. The BMI line, and every other
/// mention of BMI, is left out when it cannot be derived.
pub fn build_prompt(profile: &UserProfile) -> String {
    let language = profile.language;
    let bmi = format_bmi(profile);

    let bmi_line = bmi
        .as_ref()
        .map(|bmi| format!("- Calculated BMI: {}.\n", bmi))
        .unwrap_or_default();
    let analysis_basis = if bmi.is_some() {
        "their age, demographic, and BMI"
    } else {
        "their age and demographic"
    };

    format!(
        "You are an expert Naturopathy Doctor and Holistic Health Consultant dedicated to helping underprivileged populations.

User Profile:
- Age: {age}
- Gender: {gender}
- Location: {location}
- Medical Condition/Symptoms: {condition}
{bmi_line}- Preferred Language: {language}

Task:
Provide a comprehensive health consultation in {language}.
Focus specifically on well-established naturopathy medicines and home remedies that are very affordable and accessible.

Structure your response clearly with these sections (translate the section headings to {language}):
1. **Health Analysis**: Briefly explain the condition based on {analysis_basis}.
2. **Affordable Naturopathy Remedies**: Suggest specific herbs, easy-to-make home remedies, or low-cost natural medicines. Explain how to use them.
3. **Lifestyle & Diet**: Suggest simple lifestyle changes (yoga, diet, sleep) relevant to their condition.
4. **Sourcing & Vendors**: Suggest where they can buy these ingredients cheaply in or near {location}. Mention generic medicine stores (like Jan Aushadhi in India if applicable), local herbal markets, or common grocery items.

Tone: Empathetic, clear, and encouraging.
IMPORTANT: You have access to real-time Google Search. Use it to find REAL vendors or the specific availability of herbs near the user's location if possible.
",
        age = profile.age,
        gender = profile.gender,
        location = profile.location,
        condition = profile.condition,
        bmi_line = bmi_line,
        language = language,
        analysis_basis = analysis_basis,
    )
}
