use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "oncology";

pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Oncology Response and Staging",
        "ribbon",
        vec![
            Entry::new("recist", "RECIST 1.1", CATEGORY, EntryKind::Dynamic)
                .with_subcategory("Response")
                .with_modality([Modality::Ct, Modality::Mri])
                .with_content(RECIST),
            Entry::new(
                "mrecist",
                "mRECIST (Hepatocellular Carcinoma)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Response")
            .with_modality([Modality::Ct, Modality::Mri])
            .with_content(MRECIST),
            Entry::new(
                "lugano",
                "Lugano Classification (Lymphoma)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Staging")
            .with_modality([Modality::Pet, Modality::Ct])
            .with_content(LUGANO),
            Entry::new("deauville", "Deauville Five-Point Scale", CATEGORY, EntryKind::Informative)
                .with_subcategory("Response")
                .with_modality([Modality::Pet])
                .with_content(DEAUVILLE),
            Entry::new("tnm-lung", "TNM 8th Edition: Lung Cancer", CATEGORY, EntryKind::Informative)
                .with_subcategory("Staging")
                .with_modality([Modality::Ct, Modality::Pet])
                .with_content(TNM_LUNG),
        ],
    )
}

const RECIST: &str = r#"<section class="ref-table" data-input="sum-of-diameters">
<h3>RECIST 1.1 Response Criteria</h3>
<h4>Measurability</h4>
<ul>
<li>Target lesions: up to 5 in total, maximum 2 per organ</li>
<li>Non-nodal lesion: longest diameter &ge;10 mm on CT (slice thickness &le;5 mm)</li>
<li>Lymph node: short axis &ge;15 mm to be a target; 10-15 mm pathological non-target; &lt;10 mm normal</li>
</ul>
<table>
<thead><tr><th>Response</th><th>Target lesions</th></tr></thead>
<tbody>
<tr><td>CR</td><td>Disappearance of all target lesions; all nodes short axis &lt;10 mm</td></tr>
<tr><td>PR</td><td>&ge;30% decrease in sum of diameters from baseline</td></tr>
<tr><td>PD</td><td>&ge;20% increase from nadir and absolute increase &ge;5 mm, or new lesion</td></tr>
<tr><td>SD</td><td>Neither PR nor PD</td></tr>
</tbody>
</table>
<form class="calc">
<label>Baseline sum (mm) <input type="number" name="baseline" min="0"></label>
<label>Nadir sum (mm) <input type="number" name="nadir" min="0"></label>
<label>Current sum (mm) <input type="number" name="current" min="0"></label>
<output name="percent-change"></output>
</form>
<footer class="citation">
<p>Eisenhauer EA, Therasse P, Bogaerts J, et al. New response evaluation criteria in solid tumours: revised RECIST guideline (version 1.1). Eur J Cancer. 2009;45(2):228-247.</p>
</footer>
</section>"#;

const MRECIST: &str = r#"<section class="ref-table">
<h3>mRECIST for Hepatocellular Carcinoma</h3>
<p>Measures only the viable (arterially enhancing) portion of target lesions.</p>
<table>
<thead><tr><th>Response</th><th>Target lesions (viable tumor)</th></tr></thead>
<tbody>
<tr><td>CR</td><td>Disappearance of any intratumoral arterial enhancement in all target lesions</td></tr>
<tr><td>PR</td><td>&ge;30% decrease in the sum of diameters of viable target lesions</td></tr>
<tr><td>SD</td><td>Any case that does not qualify for PR or PD</td></tr>
<tr><td>PD</td><td>&ge;20% increase in the sum of diameters of viable target lesions from nadir</td></tr>
</tbody>
</table>
<p>New lesion: &ge;1 cm with typical HCC vascular pattern, or growth &ge;1 cm at follow-up of an atypical lesion.</p>
<footer class="citation">
<p>Lencioni R, Llovet JM. Modified RECIST (mRECIST) assessment for hepatocellular carcinoma. Semin Liver Dis. 2010;30(1):52-60.</p>
</footer>
</section>"#;

const LUGANO: &str = r#"<section class="ref-table">
<h3>Lugano Staging (Modified Ann Arbor)</h3>
<table>
<thead><tr><th>Stage</th><th>Involvement</th><th>Extranodal (E) status</th></tr></thead>
<tbody>
<tr><td>I</td><td>One node or a group of adjacent nodes</td><td>Single extranodal lesion without nodal involvement</td></tr>
<tr><td>II</td><td>Two or more nodal groups on the same side of the diaphragm</td><td>Stage I or II by nodal extent with limited contiguous extranodal involvement</td></tr>
<tr><td>II bulky</td><td>II as above with bulky disease</td><td>N/A</td></tr>
<tr><td>III</td><td>Nodes on both sides of the diaphragm; nodes above the diaphragm with spleen involvement</td><td>N/A</td></tr>
<tr><td>IV</td><td>Additional non-contiguous extralymphatic involvement</td><td>N/A</td></tr>
</tbody>
</table>
<p>Bulk: single nodal mass &ge;10 cm or &gt;1/3 of transthoracic diameter (Hodgkin lymphoma).</p>
<footer class="citation">
<p>Cheson BD, Fisher RI, Barrington SF, et al. Recommendations for initial evaluation, staging, and response assessment of Hodgkin and non-Hodgkin lymphoma: the Lugano classification. J Clin Oncol. 2014;32(27):3059-3068.</p>
</footer>
</section>"#;

const DEAUVILLE: &str = r#"<section class="ref-table">
<h3>Deauville Five-Point Scale (FDG PET)</h3>
<table>
<thead><tr><th>Score</th><th>FDG uptake</th></tr></thead>
<tbody>
<tr><td>1</td><td>No uptake above background</td></tr>
<tr><td>2</td><td>Uptake &le; mediastinum</td></tr>
<tr><td>3</td><td>Uptake &gt; mediastinum but &le; liver</td></tr>
<tr><td>4</td><td>Uptake moderately &gt; liver</td></tr>
<tr><td>5</td><td>Uptake markedly higher than liver and/or new lesions</td></tr>
<tr><td>X</td><td>New areas of uptake unlikely to be related to lymphoma</td></tr>
</tbody>
</table>
<p>Scores 1-3 at interim or end of treatment generally represent complete metabolic response.</p>
<footer class="citation">
<p>Barrington SF, Mikhaeel NG, Kostakoglu L, et al. Role of imaging in the staging and response assessment of lymphoma: consensus of the International Conference on Malignant Lymphomas Imaging Working Group. J Clin Oncol. 2014;32(27):3048-3058.</p>
</footer>
</section>"#;

const TNM_LUNG: &str = r#"<section class="ref-table">
<h3>TNM 8th Edition: Non-Small Cell Lung Cancer</h3>
<h4>T descriptor</h4>
<table>
<thead><tr><th>T</th><th>Definition</th></tr></thead>
<tbody>
<tr><td>Tis</td><td>Carcinoma in situ</td></tr>
<tr><td>T1mi</td><td>Minimally invasive adenocarcinoma</td></tr>
<tr><td>T1a / T1b / T1c</td><td>&le;1 cm / &gt;1-2 cm / &gt;2-3 cm</td></tr>
<tr><td>T2a / T2b</td><td>&gt;3-4 cm / &gt;4-5 cm, or main bronchus involvement, visceral pleural invasion, atelectasis extending to hilum</td></tr>
<tr><td>T3</td><td>&gt;5-7 cm, or invasion of chest wall, phrenic nerve, parietal pericardium; separate nodule in same lobe</td></tr>
<tr><td>T4</td><td>&gt;7 cm, or invasion of diaphragm, mediastinum, heart, great vessels, trachea, carina, esophagus, vertebra; nodule in different ipsilateral lobe</td></tr>
</tbody>
</table>
<h4>N and M descriptors</h4>
<table>
<thead><tr><th>Descriptor</th><th>Definition</th></tr></thead>
<tbody>
<tr><td>N1</td><td>Ipsilateral peribronchial and/or hilar nodes</td></tr>
<tr><td>N2</td><td>Ipsilateral mediastinal and/or subcarinal nodes</td></tr>
<tr><td>N3</td><td>Contralateral mediastinal or hilar; any scalene or supraclavicular nodes</td></tr>
<tr><td>M1a</td><td>Contralateral lung nodule; pleural or pericardial nodules or malignant effusion</td></tr>
<tr><td>M1b</td><td>Single extrathoracic metastasis</td></tr>
<tr><td>M1c</td><td>Multiple extrathoracic metastases in one or more organs</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Goldstraw P, Chansky K, Crowley J, et al. The IASLC Lung Cancer Staging Project: Proposals for Revision of the TNM Stage Groupings in the Forthcoming (Eighth) Edition of the TNM Classification for Lung Cancer. J Thorac Oncol. 2016;11(1):39-51.</p>
</footer>
</section>"#;
