use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "abdomen";

pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Abdomen and Pelvis",
        "stomach",
        vec![
            Entry::new(
                "bosniak",
                "Bosniak Classification v2019 (Cystic Renal Masses)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Kidney")
            .with_modality([Modality::Ct, Modality::Mri])
            .with_content(BOSNIAK),
            Entry::new(
                "balthazar-ctsi",
                "Balthazar Grade and CT Severity Index (Pancreatitis)",
                CATEGORY,
                EntryKind::Dynamic,
            )
            .with_subcategory("Pancreas")
            .with_modality([Modality::Ct])
            .with_content(CTSI),
            Entry::new(
                "adrenal-washout",
                "Adrenal Washout Calculation",
                CATEGORY,
                EntryKind::Dynamic,
            )
            .with_subcategory("Adrenal")
            .with_modality([Modality::Ct])
            .with_content(ADRENAL_WASHOUT),
            Entry::new(
                "aast-liver",
                "AAST Liver Injury Scale (2018)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Trauma")
            .with_modality([Modality::Ct])
            .with_content(AAST_LIVER),
            Entry::new(
                "aast-spleen",
                "AAST Spleen Injury Scale (2018)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Trauma")
            .with_modality([Modality::Ct])
            .with_content(AAST_SPLEEN),
        ],
    )
}

const BOSNIAK: &str = r#"<section class="ref-table">
<h3>Bosniak Classification, Version 2019</h3>
<table>
<thead><tr><th>Class</th><th>CT / MRI features</th><th>Management</th></tr></thead>
<tbody>
<tr><td>I</td><td>Well-defined, thin (&le;2 mm) smooth wall; homogeneous simple fluid; no septa or calcifications; wall may enhance</td><td>Benign; no follow-up</td></tr>
<tr><td>II</td><td>Few (1-3) thin septa; homogeneous hyperattenuating (&ge;70 HU) masses at unenhanced CT; homogeneous non-enhancing masses &gt;20 HU at renal mass protocol CT</td><td>Benign; no follow-up</td></tr>
<tr><td>IIF</td><td>Smooth minimally thickened (3 mm) enhancing wall or septa; many (&ge;4) smooth thin enhancing septa; heterogeneously hyperintense at fat-saturated T1 MRI</td><td>Follow-up at 6 months, 12 months, then annually for 5 years</td></tr>
<tr><td>III</td><td>One or more enhancing thick (&ge;4 mm) or enhancing irregular (&le;3 mm obtuse protrusion) walls or septa</td><td>Surgery or active surveillance</td></tr>
<tr><td>IV</td><td>One or more enhancing nodules (&ge;4 mm obtuse or any size acute-margined protrusion)</td><td>Surgery or active surveillance</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Silverman SG, Pedrosa I, Ellis JH, et al. Bosniak Classification of Cystic Renal Masses, Version 2019: An Update Proposal and Needs Assessment. Radiology. 2019;292(2):475-488.</p>
</footer>
</section>"#;

const CTSI: &str = r#"<section class="ref-table" data-input="points">
<h3>CT Severity Index (Balthazar)</h3>
<table>
<thead><tr><th>Balthazar grade</th><th>Finding</th><th>Points</th></tr></thead>
<tbody>
<tr><td>A</td><td>Normal pancreas</td><td><input type="radio" name="grade" value="0"> 0</td></tr>
<tr><td>B</td><td>Focal or diffuse enlargement of the pancreas</td><td><input type="radio" name="grade" value="1"> 1</td></tr>
<tr><td>C</td><td>Pancreatic abnormality with peripancreatic inflammation</td><td><input type="radio" name="grade" value="2"> 2</td></tr>
<tr><td>D</td><td>Single peripancreatic fluid collection</td><td><input type="radio" name="grade" value="3"> 3</td></tr>
<tr><td>E</td><td>Two or more fluid collections and/or retroperitoneal air</td><td><input type="radio" name="grade" value="4"> 4</td></tr>
</tbody>
</table>
<table>
<thead><tr><th>Pancreatic necrosis</th><th>Points</th></tr></thead>
<tbody>
<tr><td>None</td><td><input type="radio" name="necrosis" value="0"> 0</td></tr>
<tr><td>&le;30%</td><td><input type="radio" name="necrosis" value="2"> 2</td></tr>
<tr><td>&gt;30-50%</td><td><input type="radio" name="necrosis" value="4"> 4</td></tr>
<tr><td>&gt;50%</td><td><input type="radio" name="necrosis" value="6"> 6</td></tr>
</tbody>
</table>
<output name="ctsi-total"></output>
<p>Index 0-3 mild; 4-6 moderate; 7-10 severe.</p>
<footer class="citation">
<p>Balthazar EJ, Robinson DL, Megibow AJ, Ranson JH. Acute pancreatitis: value of CT in establishing prognosis. Radiology. 1990;174(2):331-336.</p>
</footer>
</section>"#;

const ADRENAL_WASHOUT: &str = r#"<section class="ref-table" data-input="attenuation">
<h3>Adrenal Washout</h3>
<form class="calc">
<label>Unenhanced (HU) <input type="number" name="unenhanced"></label>
<label>Portal venous, 60-75 s (HU) <input type="number" name="enhanced"></label>
<label>Delayed, 15 min (HU) <input type="number" name="delayed"></label>
<output name="absolute-washout"></output>
<output name="relative-washout"></output>
</form>
<table>
<thead><tr><th>Measure</th><th>Formula</th><th>Adenoma threshold</th></tr></thead>
<tbody>
<tr><td>Absolute percentage washout</td><td>(enhanced - delayed) / (enhanced - unenhanced) &times; 100</td><td>&ge;60%</td></tr>
<tr><td>Relative percentage washout</td><td>(enhanced - delayed) / enhanced &times; 100</td><td>&ge;40%</td></tr>
<tr><td>Unenhanced attenuation</td><td>Region of interest on non-contrast CT</td><td>&le;10 HU (lipid-rich adenoma)</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Mayo-Smith WW, Song JH, Boland GL, et al. Management of Incidental Adrenal Masses: A White Paper of the ACR Incidental Findings Committee. J Am Coll Radiol. 2017;14(8):1038-1044.</p>
</footer>
</section>"#;

const AAST_LIVER: &str = r#"<section class="ref-table">
<h3>AAST Liver Injury Scale (2018 Revision), Imaging Criteria</h3>
<table>
<thead><tr><th>Grade</th><th>CT findings</th></tr></thead>
<tbody>
<tr><td>I</td><td>Subcapsular hematoma &lt;10% surface area; parenchymal laceration &lt;1 cm depth</td></tr>
<tr><td>II</td><td>Subcapsular hematoma 10-50% surface area; intraparenchymal hematoma &lt;10 cm; laceration 1-3 cm depth and &le;10 cm length</td></tr>
<tr><td>III</td><td>Subcapsular hematoma &gt;50% or ruptured; intraparenchymal hematoma &gt;10 cm; laceration &gt;3 cm depth; vascular injury or active bleeding contained within parenchyma</td></tr>
<tr><td>IV</td><td>Parenchymal disruption of 25-75% of a hepatic lobe; active bleeding extending beyond the liver into the peritoneum</td></tr>
<tr><td>V</td><td>Parenchymal disruption &gt;75% of a hepatic lobe; juxtahepatic venous injury (retrohepatic IVC, central hepatic veins)</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Kozar RA, Crandall M, Shanmuganathan K, et al. Organ injury scaling 2018 update: Spleen, liver, and kidney. J Trauma Acute Care Surg. 2018;85(6):1119-1122.</p>
</footer>
</section>"#;

const AAST_SPLEEN: &str = r#"<section class="ref-table">
<h3>AAST Spleen Injury Scale (2018 Revision), Imaging Criteria</h3>
<table>
<thead><tr><th>Grade</th><th>CT findings</th></tr></thead>
<tbody>
<tr><td>I</td><td>Subcapsular hematoma &lt;10% surface area; laceration &lt;1 cm depth; capsular tear</td></tr>
<tr><td>II</td><td>Subcapsular hematoma 10-50% surface area; intraparenchymal hematoma &lt;5 cm; laceration 1-3 cm</td></tr>
<tr><td>III</td><td>Subcapsular hematoma &gt;50% or ruptured; intraparenchymal hematoma &ge;5 cm; laceration &gt;3 cm depth</td></tr>
<tr><td>IV</td><td>Laceration involving segmental or hilar vessels producing &gt;25% devascularization; vascular injury or active bleeding confined within the splenic capsule</td></tr>
<tr><td>V</td><td>Shattered spleen; vascular injury with active bleeding extending beyond the spleen into the peritoneum</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Kozar RA, Crandall M, Shanmuganathan K, et al. Organ injury scaling 2018 update: Spleen, liver, and kidney. J Trauma Acute Care Surg. 2018;85(6):1119-1122.</p>
</footer>
</section>"#;
