use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "vascular";

pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Vascular",
        "heart-pulse",
        vec![
            Entry::new(
                "carotid-doppler",
                "Carotid Stenosis by Doppler (SRU Consensus)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Carotid")
            .with_modality([Modality::Us])
            .with_content(CAROTID_DOPPLER),
            Entry::new("nascet", "NASCET Stenosis Measurement", CATEGORY, EntryKind::Dynamic)
                .with_subcategory("Carotid")
                .with_modality([Modality::Ct, Modality::Mri])
                .with_content(NASCET),
            Entry::new(
                "aortic-dissection",
                "Aortic Dissection (Stanford and DeBakey)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Aorta")
            .with_modality([Modality::Ct, Modality::Mri])
            .with_content(AORTIC_DISSECTION),
        ],
    )
}

const CAROTID_DOPPLER: &str = r#"<section class="ref-table">
<h3>Carotid Stenosis: SRU Consensus Criteria</h3>
<table>
<thead><tr><th>Degree of stenosis</th><th>ICA PSV (cm/s)</th><th>Plaque estimate</th><th>ICA/CCA PSV ratio</th><th>ICA EDV (cm/s)</th></tr></thead>
<tbody>
<tr><td>Normal</td><td>&lt;125</td><td>None</td><td>&lt;2.0</td><td>&lt;40</td></tr>
<tr><td>&lt;50%</td><td>&lt;125</td><td>&lt;50% diameter reduction</td><td>&lt;2.0</td><td>&lt;40</td></tr>
<tr><td>50-69%</td><td>125-230</td><td>&ge;50% diameter reduction</td><td>2.0-4.0</td><td>40-100</td></tr>
<tr><td>&ge;70% but less than near occlusion</td><td>&gt;230</td><td>&ge;50% diameter reduction</td><td>&gt;4.0</td><td>&gt;100</td></tr>
<tr><td>Near occlusion</td><td>High, low or undetectable</td><td>Visible</td><td>Variable</td><td>Variable</td></tr>
<tr><td>Total occlusion</td><td>Undetectable</td><td>Visible, no detectable lumen</td><td>N/A</td><td>N/A</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Grant EG, Benson CB, Moneta GL, et al. Carotid artery stenosis: gray-scale and Doppler US diagnosis. Society of Radiologists in Ultrasound Consensus Conference. Radiology. 2003;229(2):340-346.</p>
</footer>
</section>"#;

const NASCET: &str = r#"<section class="ref-table" data-input="diameters">
<h3>NASCET Stenosis</h3>
<p>Stenosis (%) = (1 - narrowest ICA lumen diameter / normal distal ICA diameter) &times; 100</p>
<form class="calc">
<label>Narrowest lumen (mm) <input type="number" name="narrowest" min="0" step="0.1"></label>
<label>Distal normal ICA (mm) <input type="number" name="distal" min="0" step="0.1"></label>
<output name="nascet-percent"></output>
</form>
<table>
<thead><tr><th>Grade</th><th>Stenosis</th></tr></thead>
<tbody>
<tr><td>Mild</td><td>&lt;50%</td></tr>
<tr><td>Moderate</td><td>50-69%</td></tr>
<tr><td>Severe</td><td>70-99%</td></tr>
<tr><td>Occlusion</td><td>100%</td></tr>
</tbody>
</table>
<footer class="citation">
<p>North American Symptomatic Carotid Endarterectomy Trial Collaborators. Beneficial effect of carotid endarterectomy in symptomatic patients with high-grade carotid stenosis. N Engl J Med. 1991;325(7):445-453.</p>
</footer>
</section>"#;

const AORTIC_DISSECTION: &str = r#"<section class="ref-table">
<h3>Aortic Dissection Classification</h3>
<table>
<thead><tr><th>System</th><th>Type</th><th>Extent</th></tr></thead>
<tbody>
<tr><td rowspan="2">Stanford</td><td>A</td><td>Involves the ascending aorta, regardless of entry site</td></tr>
<tr><td>B</td><td>Does not involve the ascending aorta</td></tr>
<tr><td rowspan="3">DeBakey</td><td>I</td><td>Originates in the ascending aorta and extends at least to the arch</td></tr>
<tr><td>II</td><td>Confined to the ascending aorta</td></tr>
<tr><td>III</td><td>Originates in the descending aorta (IIIa above, IIIb below the diaphragm)</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Daily PO, Trueblood HW, Stinson EB, Wuerflein RD, Shumway NE. Management of acute aortic dissections. Ann Thorac Surg. 1970;10(3):237-247. DeBakey ME, Henly WS, Cooley DA, et al. Surgical management of dissecting aneurysms of the aorta. J Thorac Cardiovasc Surg. 1965;49:130-149.</p>
</footer>
</section>"#;
