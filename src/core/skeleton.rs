//! The fixed page skeleton. Nothing here depends on the input record.

pub const SHEET_CSS: &str = r#"
    :root{ --bg:#fafafa; --text:#111; --muted:#555; --border:#ddd }
    *{ box-sizing:border-box }
    body{ margin:0; padding:32px; font-family:-apple-system,BlinkMacSystemFont,Segoe UI,Roboto,Helvetica,Arial,sans-serif; background:var(--bg); color:var(--text) }
    .container{ max-width:750px; margin:0 auto; background:#fff; border:1px solid var(--border); border-radius:14px; box-shadow:0 6px 22px rgba(0,0,0,.06) }
    header{ padding:24px 24px 8px; border-bottom:1px solid var(--border) }
    h1{ margin:0 0 6px; font-size:28px }
    .meta{ color:var(--muted); font-size:14px }
    section{ padding:20px 24px }
    h2{ font-size:18px; margin:0 0 12px; color:#222 }
    h3{ font-size:16px; margin:10px 0 8px; color:#222 }
    table{ width:100%; border-collapse:collapse; margin:8px 0 16px }
    th, td{ border:1px solid var(--border); padding:10px 12px; text-align:left; vertical-align:top }
    th{ background:#f4f6f8; font-weight:600 }
    ul{ margin:8px 0 0 20px }
    li{ margin:6px 0 }
    .info-grid{ display:grid; grid-template-columns: 1fr 1fr; gap:10px }
    footer{ padding:16px 24px 24px; color:var(--muted); font-size:12px }
    "#;

pub const SECTION_CLIENT_INFORMATION: &str = "Section 1: Client Information";
pub const SECTION_MEASUREMENTS: &str = "Section 2: Measurements";
pub const SECTION_STYLE_CHOICES: &str = "Section 3: Style Choices";
pub const SECTION_TAILOR_INSTRUCTIONS: &str = "Section 4: Tailor Instructions";

pub const SHEET_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Client Sheet – $name</title>
  <style>$css</style>
</head>
<body>
  <div class="container">
    <header>
      <h1>Client Sheet – $name</h1>
      <div class="meta">Date: $date_str · Garment: $garment</div>
    </header>

    <section>
      <h2>$section_info</h2>
      $info_html
    </section>

    <section>
      <h2>$section_measurements</h2>

      <h3>Shirt</h3>
      $shirt_table

      <h3>Trouser</h3>
      $trouser_table
    </section>

    <section>
      <h2>$section_styles</h2>
      <h3>Shirt</h3>
      <ul>$style_shirt_html</ul>
      <h3>Trouser</h3>
      <ul>$style_trouser_html</ul>
    </section>

    <section>
      <h2>$section_instructions</h2>
      <ul>$instructions_html</ul>
    </section>

    <footer>
      Generated on $generated_on
    </footer>
  </div>
</body>
</html>
"#;
