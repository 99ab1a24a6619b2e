use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "rads";

pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Reporting and Data Systems (RADS)",
        "clipboard-list",
        vec![
            Entry::new(
                "birads",
                "BI-RADS (Breast Imaging Reporting and Data System)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Breast")
            .with_modality([Modality::Mg, Modality::Us, Modality::Mri])
            .with_content(BIRADS),
            Entry::new("tirads", "ACR TI-RADS (Thyroid)", CATEGORY, EntryKind::Dynamic)
                .with_subcategory("Head and Neck")
                .with_modality([Modality::Us])
                .with_content(TIRADS),
            Entry::new("lirads", "LI-RADS v2018 CT/MRI", CATEGORY, EntryKind::Informative)
                .with_subcategory("Liver")
                .with_modality([Modality::Ct, Modality::Mri])
                .with_content(LIRADS),
            Entry::new("pirads", "PI-RADS v2.1 (Prostate)", CATEGORY, EntryKind::Informative)
                .with_subcategory("Prostate")
                .with_modality([Modality::Mri])
                .with_content(PIRADS),
            Entry::new("lung-rads", "Lung-RADS v2022", CATEGORY, EntryKind::Informative)
                .with_subcategory("Chest")
                .with_modality([Modality::Ct])
                .with_content(LUNG_RADS),
            Entry::new("orads-us", "O-RADS US v2022", CATEGORY, EntryKind::Informative)
                .with_subcategory("Gynecology")
                .with_modality([Modality::Us])
                .with_content(ORADS_US),
            Entry::new("orads-mri", "O-RADS MRI", CATEGORY, EntryKind::Informative)
                .with_subcategory("Gynecology")
                .with_modality([Modality::Mri])
                .with_content(ORADS_MRI),
            Entry::new("cad-rads", "CAD-RADS 2.0 (Coronary CTA)", CATEGORY, EntryKind::Informative)
                .with_subcategory("Cardiac")
                .with_modality([Modality::Ct])
                .with_content(CAD_RADS),
            Entry::new(
                "ni-rads",
                "NI-RADS (Head and Neck Cancer Surveillance)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Head and Neck")
            .with_modality([Modality::Ct, Modality::Mri, Modality::Pet])
            .with_content(NI_RADS),
        ],
    )
}

const BIRADS: &str = r#"<section class="ref-table">
<h3>BI-RADS Assessment Categories</h3>
<table>
<thead><tr><th>Category</th><th>Assessment</th><th>Likelihood of cancer</th><th>Management</th></tr></thead>
<tbody>
<tr><td>0</td><td>Incomplete: need additional imaging evaluation and/or prior mammograms for comparison</td><td>N/A</td><td>Recall for additional imaging and/or comparison with prior examinations</td></tr>
<tr><td>1</td><td>Negative</td><td>Essentially 0%</td><td>Routine screening</td></tr>
<tr><td>2</td><td>Benign</td><td>Essentially 0%</td><td>Routine screening</td></tr>
<tr><td>3</td><td>Probably benign</td><td>&gt;0% but &le;2%</td><td>Short-interval (6-month) follow-up or continued surveillance</td></tr>
<tr><td>4A</td><td>Low suspicion for malignancy</td><td>&gt;2% to &le;10%</td><td>Tissue diagnosis</td></tr>
<tr><td>4B</td><td>Moderate suspicion for malignancy</td><td>&gt;10% to &le;50%</td><td>Tissue diagnosis</td></tr>
<tr><td>4C</td><td>High suspicion for malignancy</td><td>&gt;50% to &lt;95%</td><td>Tissue diagnosis</td></tr>
<tr><td>5</td><td>Highly suggestive of malignancy</td><td>&ge;95%</td><td>Tissue diagnosis</td></tr>
<tr><td>6</td><td>Known biopsy-proven malignancy</td><td>N/A</td><td>Surgical excision when clinically appropriate</td></tr>
</tbody>
</table>
<h4>Breast composition (mammography)</h4>
<ul>
<li><strong>a</strong> Almost entirely fatty</li>
<li><strong>b</strong> Scattered areas of fibroglandular density</li>
<li><strong>c</strong> Heterogeneously dense, which may obscure small masses</li>
<li><strong>d</strong> Extremely dense, which lowers the sensitivity of mammography</li>
</ul>
<footer class="citation">
<p>D'Orsi CJ, Sickles EA, Mendelson EB, Morris EA, et al. ACR BI-RADS&reg; Atlas, Breast Imaging Reporting and Data System. 5th ed. Reston, VA: American College of Radiology; 2013.</p>
</footer>
</section>"#;

const TIRADS: &str = r#"<section class="ref-table" data-input="points">
<h3>ACR TI-RADS</h3>
<p>Select one feature from each of the first four groups and all applicable echogenic foci; add the points.</p>
<table>
<thead><tr><th>Feature group</th><th>Finding</th><th>Points</th></tr></thead>
<tbody>
<tr><td rowspan="3">Composition</td><td>Cystic or almost completely cystic; spongiform</td><td><input type="radio" name="composition" value="0"> 0</td></tr>
<tr><td>Mixed cystic and solid</td><td><input type="radio" name="composition" value="1"> 1</td></tr>
<tr><td>Solid or almost completely solid</td><td><input type="radio" name="composition" value="2"> 2</td></tr>
<tr><td rowspan="4">Echogenicity</td><td>Anechoic</td><td><input type="radio" name="echogenicity" value="0"> 0</td></tr>
<tr><td>Hyperechoic or isoechoic</td><td><input type="radio" name="echogenicity" value="1"> 1</td></tr>
<tr><td>Hypoechoic</td><td><input type="radio" name="echogenicity" value="2"> 2</td></tr>
<tr><td>Very hypoechoic</td><td><input type="radio" name="echogenicity" value="3"> 3</td></tr>
<tr><td rowspan="2">Shape</td><td>Wider-than-tall</td><td><input type="radio" name="shape" value="0"> 0</td></tr>
<tr><td>Taller-than-wide</td><td><input type="radio" name="shape" value="3"> 3</td></tr>
<tr><td rowspan="4">Margin</td><td>Smooth</td><td><input type="radio" name="margin" value="0"> 0</td></tr>
<tr><td>Ill-defined</td><td><input type="radio" name="margin" value="0"> 0</td></tr>
<tr><td>Lobulated or irregular</td><td><input type="radio" name="margin" value="2"> 2</td></tr>
<tr><td>Extra-thyroidal extension</td><td><input type="radio" name="margin" value="3"> 3</td></tr>
<tr><td rowspan="4">Echogenic foci</td><td>None or large comet-tail artifacts</td><td><input type="checkbox" name="foci" value="0"> 0</td></tr>
<tr><td>Macrocalcifications</td><td><input type="checkbox" name="foci" value="1"> 1</td></tr>
<tr><td>Peripheral (rim) calcifications</td><td><input type="checkbox" name="foci" value="2"> 2</td></tr>
<tr><td>Punctate echogenic foci</td><td><input type="checkbox" name="foci" value="3"> 3</td></tr>
</tbody>
</table>
<h4>Risk levels</h4>
<table>
<thead><tr><th>Points</th><th>Level</th><th>Recommendation</th></tr></thead>
<tbody>
<tr><td>0</td><td>TR1 Benign</td><td>No FNA</td></tr>
<tr><td>2</td><td>TR2 Not suspicious</td><td>No FNA</td></tr>
<tr><td>3</td><td>TR3 Mildly suspicious</td><td>FNA if &ge;2.5 cm; follow if &ge;1.5 cm</td></tr>
<tr><td>4-6</td><td>TR4 Moderately suspicious</td><td>FNA if &ge;1.5 cm; follow if &ge;1.0 cm</td></tr>
<tr><td>&ge;7</td><td>TR5 Highly suspicious</td><td>FNA if &ge;1.0 cm; follow if &ge;0.5 cm</td></tr>
</tbody>
</table>
<output name="tirads-total"></output>
<footer class="citation">
<p>Tessler FN, Middleton WD, Grant EG, et al. ACR Thyroid Imaging, Reporting and Data System (TI-RADS): White Paper of the ACR TI-RADS Committee. J Am Coll Radiol. 2017;14(5):587-595.</p>
</footer>
</section>"#;

const LIRADS: &str = r#"<section class="ref-table">
<h3>LI-RADS v2018 Diagnostic Categories (CT/MRI)</h3>
<p>Applies to patients at high risk for hepatocellular carcinoma (cirrhosis, chronic hepatitis B, current or prior HCC).</p>
<table>
<thead><tr><th>Category</th><th>Meaning</th></tr></thead>
<tbody>
<tr><td>LR-NC</td><td>Not categorizable due to image degradation or omission</td></tr>
<tr><td>LR-1</td><td>Definitely benign</td></tr>
<tr><td>LR-2</td><td>Probably benign</td></tr>
<tr><td>LR-3</td><td>Intermediate probability of malignancy</td></tr>
<tr><td>LR-4</td><td>Probably HCC</td></tr>
<tr><td>LR-5</td><td>Definitely HCC</td></tr>
<tr><td>LR-M</td><td>Probably or definitely malignant, not HCC specific</td></tr>
<tr><td>LR-TIV</td><td>Tumor in vein</td></tr>
</tbody>
</table>
<h4>Diagnostic table (nonrim APHE present)</h4>
<table>
<thead><tr><th>Observation size</th><th>No additional major feature</th><th>One additional major feature</th><th>&ge;Two additional major features</th></tr></thead>
<tbody>
<tr><td>&lt;10 mm</td><td>LR-3</td><td>LR-4</td><td>LR-4</td></tr>
<tr><td>10-19 mm</td><td>LR-3</td><td>LR-4 (LR-5 if threshold growth or nonperipheral washout)</td><td>LR-5</td></tr>
<tr><td>&ge;20 mm</td><td>LR-4</td><td>LR-5</td><td>LR-5</td></tr>
</tbody>
</table>
<p>Additional major features: nonperipheral washout, enhancing capsule, threshold growth.</p>
<footer class="citation">
<p>American College of Radiology. CT/MRI Liver Imaging Reporting and Data System version 2018. Chernyak V, Fowler KJ, Kamaya A, et al. Radiology. 2018;289(3):816-830.</p>
</footer>
</section>"#;

const PIRADS: &str = r#"<section class="ref-table">
<h3>PI-RADS v2.1 Assessment Categories</h3>
<table>
<thead><tr><th>Score</th><th>Likelihood of clinically significant cancer</th></tr></thead>
<tbody>
<tr><td>1</td><td>Very low (highly unlikely to be present)</td></tr>
<tr><td>2</td><td>Low (unlikely to be present)</td></tr>
<tr><td>3</td><td>Intermediate (equivocal)</td></tr>
<tr><td>4</td><td>High (likely to be present)</td></tr>
<tr><td>5</td><td>Very high (highly likely to be present)</td></tr>
</tbody>
</table>
<h4>Dominant sequence</h4>
<table>
<thead><tr><th>Zone</th><th>Dominant sequence</th><th>Modifier</th></tr></thead>
<tbody>
<tr><td>Peripheral zone</td><td>DWI/ADC</td><td>DWI 3 upgraded to 4 when DCE is positive</td></tr>
<tr><td>Transition zone</td><td>T2W</td><td>T2W 2 upgraded to 3 when DWI &ge;4; T2W 3 upgraded to 4 when DWI = 5</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Turkbey B, Rosenkrantz AB, Haider MA, et al. Prostate Imaging Reporting and Data System Version 2.1: 2019 Update of Prostate Imaging Reporting and Data System Version 2. Eur Urol. 2019;76(3):340-351.</p>
</footer>
</section>"#;

const LUNG_RADS: &str = r#"<section class="ref-table">
<h3>Lung-RADS v2022</h3>
<table>
<thead><tr><th>Category</th><th>Descriptor</th><th>Representative findings (solid nodule, baseline)</th><th>Management</th></tr></thead>
<tbody>
<tr><td>0</td><td>Incomplete</td><td>Prior CT being located; part of lungs not evaluable; findings suggestive of inflammatory or infectious process</td><td>Comparison or 1-3 month LDCT</td></tr>
<tr><td>1</td><td>Negative</td><td>No nodules; nodules with benign calcification or fat</td><td>12-month LDCT</td></tr>
<tr><td>2</td><td>Benign</td><td>Solid &lt;6 mm; new solid &lt;4 mm; perifissural &lt;10 mm; nonsolid &lt;30 mm</td><td>12-month LDCT</td></tr>
<tr><td>3</td><td>Probably benign</td><td>Solid &ge;6 to &lt;8 mm; new solid 4 to &lt;6 mm; nonsolid &ge;30 mm</td><td>6-month LDCT</td></tr>
<tr><td>4A</td><td>Suspicious</td><td>Solid &ge;8 to &lt;15 mm; growing &lt;8 mm; new 6 to &lt;8 mm</td><td>3-month LDCT; PET/CT may be considered if solid component &ge;8 mm</td></tr>
<tr><td>4B</td><td>Very suspicious</td><td>Solid &ge;15 mm; new or growing &ge;8 mm</td><td>Chest CT with or without contrast, PET/CT and/or tissue sampling</td></tr>
<tr><td>4X</td><td>Very suspicious</td><td>Category 3 or 4 nodules with additional features that increase suspicion</td><td>As for 4B</td></tr>
<tr><td>S</td><td>Significant or potentially significant</td><td>Clinically significant non-lung-cancer findings (modifier)</td><td>As appropriate to the finding</td></tr>
</tbody>
</table>
<footer class="citation">
<p>American College of Radiology Committee on Lung-RADS&reg;. Lung-RADS Assessment Categories 2022. Christensen J, Prosper AE, Wu CC, et al. ACR Lung-RADS v2022: Assessment Categories and Management Recommendations. J Am Coll Radiol. 2024;21(3):473-488.</p>
</footer>
</section>"#;

const ORADS_US: &str = r#"<section class="ref-table">
<h3>O-RADS US v2022 Risk Stratification</h3>
<table>
<thead><tr><th>Category</th><th>Risk</th><th>Lexicon descriptors (examples)</th><th>Management (premenopausal)</th></tr></thead>
<tbody>
<tr><td>O-RADS 0</td><td>Incomplete evaluation</td><td>Technical factors limit evaluation</td><td>Repeat study or alternate study</td></tr>
<tr><td>O-RADS 1</td><td>Normal ovary</td><td>Follicle &le;3 cm; corpus luteum &le;3 cm</td><td>None</td></tr>
<tr><td>O-RADS 2</td><td>Almost certainly benign (&lt;1%)</td><td>Simple cyst &le;10 cm; classic benign lesions &lt;10 cm</td><td>None or follow-up per size</td></tr>
<tr><td>O-RADS 3</td><td>Low risk (1% to &lt;10%)</td><td>Unilocular or bilocular cyst with smooth inner margin &ge;10 cm; multilocular smooth &lt;10 cm, CS 1-3</td><td>US specialist or MRI; gynecologist</td></tr>
<tr><td>O-RADS 4</td><td>Intermediate risk (10% to &lt;50%)</td><td>Multilocular without solid component &ge;10 cm or CS 4; unilocular with solid component, 1-3 papillary projections</td><td>US specialist or MRI; gynecologist with oncologist consultation</td></tr>
<tr><td>O-RADS 5</td><td>High risk (&ge;50%)</td><td>Unilocular with &ge;4 papillary projections; multilocular with solid component CS 3-4; ascites and/or peritoneal nodules</td><td>Gynecologic oncologist</td></tr>
</tbody>
</table>
<p>CS: color score (1 no flow, 2 minimal, 3 moderate, 4 very strong).</p>
<footer class="citation">
<p>Strachowski LM, Jha P, Phillips CH, et al. O-RADS US v2022: An Update from the American College of Radiology's Ovarian-Adnexal Reporting and Data System US Committee. Radiology. 2023;308(3):e230685.</p>
</footer>
</section>"#;

const ORADS_MRI: &str = r#"<section class="ref-table">
<h3>O-RADS MRI Risk Score</h3>
<table>
<thead><tr><th>Score</th><th>Risk category</th><th>Positive predictive value for malignancy</th><th>Findings (examples)</th></tr></thead>
<tbody>
<tr><td>0</td><td>Incomplete evaluation</td><td>N/A</td><td>Technical limitations</td></tr>
<tr><td>1</td><td>Normal ovaries</td><td>N/A</td><td>No adnexal lesion; follicles, corpus luteum</td></tr>
<tr><td>2</td><td>Almost certainly benign</td><td>&lt;0.5%</td><td>Unilocular cyst of any fluid type without wall enhancement; lesion with lipid and no solid tissue; solid tissue with homogeneous low T2 and DWI signal</td></tr>
<tr><td>3</td><td>Low risk</td><td>~5%</td><td>Unilocular cyst with smooth wall enhancement; multilocular cyst without solid tissue; solid tissue with low-risk TIC</td></tr>
<tr><td>4</td><td>Intermediate risk</td><td>~50%</td><td>Solid tissue with intermediate-risk TIC; lesion with lipid and large-volume enhancing solid tissue</td></tr>
<tr><td>5</td><td>High risk</td><td>~90%</td><td>Solid tissue with high-risk TIC; peritoneal, mesenteric or omental nodularity</td></tr>
</tbody>
</table>
<p>TIC: time-intensity curve from DCE imaging compared with outer myometrium.</p>
<footer class="citation">
<p>Thomassin-Naggara I, Poncelet E, Jalaguier-Coudray A, et al. Ovarian-Adnexal Reporting Data System Magnetic Resonance Imaging (O-RADS MRI) Score for Risk Stratification of Sonographically Indeterminate Adnexal Masses. JAMA Netw Open. 2020;3(1):e1919896.</p>
</footer>
</section>"#;

const CAD_RADS: &str = r#"<section class="ref-table">
<h3>CAD-RADS 2.0 Stenosis Categories</h3>
<table>
<thead><tr><th>Category</th><th>Maximal stenosis</th><th>Interpretation</th><th>Further cardiac investigation</th></tr></thead>
<tbody>
<tr><td>0</td><td>0% (no plaque or stenosis)</td><td>Absence of CAD</td><td>None</td></tr>
<tr><td>1</td><td>1-24%</td><td>Minimal non-obstructive CAD</td><td>None</td></tr>
<tr><td>2</td><td>25-49%</td><td>Mild non-obstructive CAD</td><td>None</td></tr>
<tr><td>3</td><td>50-69%</td><td>Moderate stenosis</td><td>Consider functional assessment</td></tr>
<tr><td>4A</td><td>70-99%</td><td>Severe stenosis</td><td>Consider invasive coronary angiography or functional assessment</td></tr>
<tr><td>4B</td><td>Left main &gt;50% or three-vessel obstructive (&ge;70%) disease</td><td>Severe stenosis</td><td>Invasive coronary angiography recommended</td></tr>
<tr><td>5</td><td>100% (total occlusion)</td><td>Total occlusion</td><td>Consider invasive coronary angiography and/or viability assessment</td></tr>
<tr><td>N</td><td>Non-diagnostic study</td><td>Obstructive CAD cannot be excluded</td><td>Additional or alternative evaluation</td></tr>
</tbody>
</table>
<h4>Plaque burden and modifiers</h4>
<ul>
<li><strong>P1-P4</strong> plaque burden: mild, moderate, severe, extensive</li>
<li><strong>HRP</strong> high-risk plaque; <strong>I</strong> ischemia; <strong>S</strong> stent; <strong>G</strong> graft; <strong>E</strong> exceptions</li>
</ul>
<footer class="citation">
<p>Cury RC, Leipsic J, Abbara S, et al. CAD-RADS&trade; 2.0 - 2022 Coronary Artery Disease-Reporting and Data System. J Cardiovasc Comput Tomogr. 2022;16(6):536-557.</p>
</footer>
</section>"#;

const NI_RADS: &str = r#"<section class="ref-table">
<h3>NI-RADS Surveillance Categories</h3>
<table>
<thead><tr><th>Category</th><th>Level of suspicion</th><th>Primary site findings (CECT/CEMRI)</th><th>Management</th></tr></thead>
<tbody>
<tr><td>1</td><td>No evidence of recurrence</td><td>Expected post-treatment change; non-enhancing tissue</td><td>Routine surveillance</td></tr>
<tr><td>2a</td><td>Low suspicion (mucosal)</td><td>Focal mucosal enhancement, non-mass-like</td><td>Direct inspection</td></tr>
<tr><td>2b</td><td>Low suspicion (deep)</td><td>Deep, ill-defined soft tissue with mild differential enhancement</td><td>Short-interval follow-up or PET</td></tr>
<tr><td>3</td><td>High suspicion</td><td>New or enlarging discrete nodule or mass with intense enhancement</td><td>Biopsy</td></tr>
<tr><td>4</td><td>Definite recurrence</td><td>Pathologically proven or definite radiologic and clinical progression</td><td>Clinical management</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Aiken AH, Rath TJ, Anzai Y, et al. ACR Neck Imaging Reporting and Data Systems (NI-RADS): A White Paper of the ACR NI-RADS Committee. J Am Coll Radiol. 2018;15(8):1097-1108.</p>
</footer>
</section>"#;
