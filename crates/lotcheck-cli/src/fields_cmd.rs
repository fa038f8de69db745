use lotcheck::ValidationProfile;

use crate::cli::OutputFormat;

pub fn run(format: &OutputFormat) -> Result<(), i32> {
    let profile = ValidationProfile::aerospace_lot();

    match format {
        OutputFormat::Text => {
            println!("checklist ({} fields):", profile.checklist.len());
            for field in profile.checklist.fields() {
                println!("  {field}");
            }
            println!("numeric ranges:");
            for rule in &profile.range_rules {
                println!("  {}: {} to {}", rule.field, rule.min, rule.max);
            }
            println!("identity fields (must match across pages):");
            for field in &profile.identity_fields {
                println!("  {field}");
            }
        }
        OutputFormat::Json => {
            let ranges: Vec<_> = profile
                .range_rules
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "field": r.field,
                        "min": r.min,
                        "max": r.max,
                    })
                })
                .collect();
            let obj = serde_json::json!({
                "checklist": profile.checklist.fields(),
                "ranges": ranges,
                "identity_fields": profile.identity_fields,
            });
            println!("{}", serde_json::to_string_pretty(&obj).unwrap());
        }
    }

    Ok(())
}
