use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "chest";

pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Thoracic Imaging",
        "lungs",
        vec![
            Entry::new(
                "fleischner",
                "Fleischner Society 2017 Guidelines (Incidental Pulmonary Nodules)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Nodules")
            .with_modality([Modality::Ct])
            .with_content(FLEISCHNER),
            Entry::new("co-rads", "CO-RADS (COVID-19 Suspicion)", CATEGORY, EntryKind::Informative)
                .with_subcategory("Infection")
                .with_modality([Modality::Ct])
                .with_content(CO_RADS),
            Entry::new(
                "pneumothorax-size",
                "Pneumothorax Size (BTS and ACCP)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Pleura")
            .with_modality([Modality::Xr, Modality::Ct])
            .with_content(PNEUMOTHORAX),
        ],
    )
}

const FLEISCHNER: &str = r#"<section class="ref-table">
<h3>Fleischner Society 2017: Incidental Pulmonary Nodules</h3>
<p>Adults &ge;35 years without known cancer or immunosuppression.</p>
<h4>Solid nodules</h4>
<table>
<thead><tr><th>Type</th><th>&lt;6 mm (&lt;100 mm&sup3;)</th><th>6-8 mm (100-250 mm&sup3;)</th><th>&gt;8 mm (&gt;250 mm&sup3;)</th></tr></thead>
<tbody>
<tr><td>Single, low risk</td><td>No routine follow-up</td><td>CT at 6-12 months, then consider CT at 18-24 months</td><td>Consider CT at 3 months, PET/CT, or tissue sampling</td></tr>
<tr><td>Single, high risk</td><td>Optional CT at 12 months</td><td>CT at 6-12 months, then CT at 18-24 months</td><td>Consider CT at 3 months, PET/CT, or tissue sampling</td></tr>
<tr><td>Multiple, low risk</td><td>No routine follow-up</td><td>CT at 3-6 months, then consider CT at 18-24 months</td><td>CT at 3-6 months, then consider CT at 18-24 months</td></tr>
<tr><td>Multiple, high risk</td><td>Optional CT at 12 months</td><td>CT at 3-6 months, then at 18-24 months</td><td>CT at 3-6 months, then at 18-24 months</td></tr>
</tbody>
</table>
<h4>Subsolid nodules</h4>
<table>
<thead><tr><th>Type</th><th>&lt;6 mm</th><th>&ge;6 mm</th></tr></thead>
<tbody>
<tr><td>Single ground glass</td><td>No routine follow-up</td><td>CT at 6-12 months, then every 2 years until 5 years</td></tr>
<tr><td>Single part solid</td><td>No routine follow-up</td><td>CT at 3-6 months; if unchanged and solid component &lt;6 mm, annual CT for 5 years</td></tr>
<tr><td>Multiple</td><td>CT at 3-6 months; if stable consider CT at 2 and 4 years</td><td>CT at 3-6 months; subsequent management based on most suspicious nodule</td></tr>
</tbody>
</table>
<footer class="citation">
<p>MacMahon H, Naidich DP, Goo JM, et al. Guidelines for Management of Incidental Pulmonary Nodules Detected on CT Images: From the Fleischner Society 2017. Radiology. 2017;284(1):228-243.</p>
</footer>
</section>"#;

const CO_RADS: &str = r#"<section class="ref-table">
<h3>CO-RADS</h3>
<table>
<thead><tr><th>Category</th><th>Level of suspicion</th><th>Summary</th></tr></thead>
<tbody>
<tr><td>0</td><td>Not interpretable</td><td>Scan technically insufficient</td></tr>
<tr><td>1</td><td>Very low</td><td>Normal or non-infectious findings</td></tr>
<tr><td>2</td><td>Low</td><td>Typical for other infection, not COVID-19</td></tr>
<tr><td>3</td><td>Equivocal</td><td>Features compatible with COVID-19 but also other diseases</td></tr>
<tr><td>4</td><td>High</td><td>Suspicious for COVID-19</td></tr>
<tr><td>5</td><td>Very high</td><td>Typical for COVID-19</td></tr>
<tr><td>6</td><td>Proven</td><td>RT-PCR positive for SARS-CoV-2</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Prokop M, van Everdingen W, van Rees Vellinga T, et al. CO-RADS: A Categorical CT Assessment Scheme for Patients Suspected of Having COVID-19-Definition and Evaluation. Radiology. 2020;296(2):E97-E104.</p>
</footer>
</section>"#;

const PNEUMOTHORAX: &str = r#"<section class="ref-table">
<h3>Pneumothorax Size Estimation</h3>
<table>
<thead><tr><th>Guideline</th><th>Measurement</th><th>Large pneumothorax</th></tr></thead>
<tbody>
<tr><td>BTS 2010</td><td>Interpleural distance at the level of the hilum</td><td>&ge;2 cm</td></tr>
<tr><td>ACCP 2001</td><td>Apex to cupola distance</td><td>&ge;3 cm</td></tr>
</tbody>
</table>
<p>Light index: percentage = 100 &times; (1 - lung diameter&sup3; / hemithorax diameter&sup3;).</p>
<footer class="citation">
<p>MacDuff A, Arnold A, Harvey J; BTS Pleural Disease Guideline Group. Management of spontaneous pneumothorax: British Thoracic Society Pleural Disease Guideline 2010. Thorax. 2010;65 Suppl 2:ii18-31.</p>
</footer>
</section>"#;
