use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "measurements";

// Formula and unit tables apply to any cross-sectional modality, so most of
// these entries carry no modality tag.
pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Measurements and Normal Values",
        "ruler",
        vec![
            Entry::new("ellipsoid-volume", "Ellipsoid Volume Formula", CATEGORY, EntryKind::Dynamic)
                .with_subcategory("Formulas")
                .with_content(ELLIPSOID_VOLUME),
            Entry::new("psa-density", "PSA Density", CATEGORY, EntryKind::Dynamic)
                .with_subcategory("Formulas")
                .with_modality([Modality::Mri, Modality::Us])
                .with_content(PSA_DENSITY),
            Entry::new(
                "organ-sizes-adult",
                "Normal Adult Organ Sizes (Ultrasound)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Normal values")
            .with_modality([Modality::Us])
            .with_content(ORGAN_SIZES),
            Entry::new(
                "hounsfield-units",
                "Hounsfield Unit Reference Values",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Normal values")
            .with_modality([Modality::Ct])
            .with_content(HOUNSFIELD),
            Entry::new(
                "radiation-dose",
                "Typical Effective Doses",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_content(RADIATION_DOSE),
        ],
    )
}

const ELLIPSOID_VOLUME: &str = r#"<section class="ref-table" data-input="dimensions">
<h3>Ellipsoid Volume</h3>
<p>Volume = length &times; width &times; height &times; &pi;/6 (&asymp; 0.523)</p>
<form class="calc">
<label>Length (cm) <input type="number" name="length" min="0" step="0.1"></label>
<label>Width (cm) <input type="number" name="width" min="0" step="0.1"></label>
<label>Height (cm) <input type="number" name="height" min="0" step="0.1"></label>
<output name="volume-ml"></output>
</form>
<p>Used for prostate, thyroid lobes, bladder (pre/post void), testes and focal lesions.</p>
<footer class="citation">
<p>Terris MK, Stamey TA. Determination of prostate volume by transrectal ultrasound. J Urol. 1991;145(5):984-987.</p>
</footer>
</section>"#;

const PSA_DENSITY: &str = r#"<section class="ref-table" data-input="psa-volume">
<h3>PSA Density</h3>
<p>PSAD = serum PSA (ng/mL) / prostate volume (mL)</p>
<form class="calc">
<label>PSA (ng/mL) <input type="number" name="psa" min="0" step="0.01"></label>
<label>Prostate volume (mL) <input type="number" name="volume" min="0" step="0.1"></label>
<output name="psad"></output>
</form>
<table>
<thead><tr><th>PSAD (ng/mL/mL)</th><th>Interpretation</th></tr></thead>
<tbody>
<tr><td>&lt;0.10</td><td>Low risk of clinically significant cancer</td></tr>
<tr><td>0.10-0.15</td><td>Intermediate</td></tr>
<tr><td>&gt;0.15</td><td>Elevated; favors biopsy, particularly with PI-RADS 3</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Benson MC, Whang IS, Pantuck A, et al. Prostate specific antigen density: a means of distinguishing benign prostatic hypertrophy and prostate cancer. J Urol. 1992;147(3 Pt 2):815-816.</p>
</footer>
</section>"#;

const ORGAN_SIZES: &str = r#"<section class="ref-table">
<h3>Normal Adult Organ Sizes</h3>
<table>
<thead><tr><th>Organ</th><th>Measurement</th><th>Upper limit of normal</th></tr></thead>
<tbody>
<tr><td>Liver</td><td>Craniocaudal, midclavicular line</td><td>~16 cm</td></tr>
<tr><td>Spleen</td><td>Long axis</td><td>~13 cm</td></tr>
<tr><td>Kidney</td><td>Length</td><td>10-12 cm (normal range)</td></tr>
<tr><td>Common bile duct</td><td>Inner diameter</td><td>6 mm (add ~1 mm per decade over 60)</td></tr>
<tr><td>Gallbladder wall</td><td>Thickness</td><td>3 mm</td></tr>
<tr><td>Abdominal aorta</td><td>Outer-to-outer diameter</td><td>&lt;3 cm</td></tr>
<tr><td>Pancreatic duct</td><td>Diameter</td><td>3 mm</td></tr>
<tr><td>Thyroid lobe</td><td>Length &times; AP &times; transverse</td><td>~5 &times; 2 &times; 2 cm</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Rumack CM, Levine D, eds. Diagnostic Ultrasound. 5th ed. Philadelphia: Elsevier; 2018.</p>
</footer>
</section>"#;

const HOUNSFIELD: &str = r#"<section class="ref-table">
<h3>Hounsfield Unit Reference Values</h3>
<table>
<thead><tr><th>Substance</th><th>Typical range (HU)</th></tr></thead>
<tbody>
<tr><td>Air</td><td>-1000</td></tr>
<tr><td>Lung parenchyma</td><td>-900 to -500</td></tr>
<tr><td>Fat</td><td>-120 to -60</td></tr>
<tr><td>Water / simple fluid</td><td>0 to 20</td></tr>
<tr><td>Unclotted blood</td><td>30 to 45</td></tr>
<tr><td>Acute clotted blood</td><td>50 to 80</td></tr>
<tr><td>Soft tissue, muscle</td><td>35 to 55</td></tr>
<tr><td>Liver (unenhanced)</td><td>55 to 65</td></tr>
<tr><td>Cortical bone</td><td>&gt;700</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Buzug TM. Computed Tomography: From Photon Statistics to Modern Cone-Beam CT. Berlin: Springer; 2008.</p>
</footer>
</section>"#;

const RADIATION_DOSE: &str = r#"<section class="ref-table">
<h3>Typical Adult Effective Doses</h3>
<table>
<thead><tr><th>Examination</th><th>Effective dose (mSv)</th><th>Equivalent background radiation</th></tr></thead>
<tbody>
<tr><td>Chest radiograph (PA)</td><td>0.02</td><td>~3 days</td></tr>
<tr><td>Screening mammogram</td><td>0.4</td><td>~7 weeks</td></tr>
<tr><td>Head CT</td><td>2</td><td>~8 months</td></tr>
<tr><td>Low-dose lung cancer screening CT</td><td>1.5</td><td>~6 months</td></tr>
<tr><td>Chest CT</td><td>7</td><td>~2 years</td></tr>
<tr><td>Abdomen and pelvis CT</td><td>10</td><td>~3 years</td></tr>
<tr><td>Coronary CT angiography</td><td>12</td><td>~4 years</td></tr>
<tr><td>FDG PET/CT</td><td>25</td><td>~8 years</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Mettler FA Jr, Huda W, Yoshizumi TT, Mahesh M. Effective doses in radiology and diagnostic nuclear medicine: a catalog. Radiology. 2008;248(1):254-263.</p>
</footer>
</section>"#;
