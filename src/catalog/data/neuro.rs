use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "neuro";

pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Neuroradiology",
        "brain",
        vec![
            Entry::new(
                "aspects",
                "ASPECTS (Alberta Stroke Program Early CT Score)",
                CATEGORY,
                EntryKind::Dynamic,
            )
            .with_subcategory("Brain")
            .with_modality([Modality::Ct])
            .with_content(ASPECTS),
            Entry::new(
                "fazekas",
                "Fazekas Scale (White Matter Hyperintensities)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Brain")
            .with_modality([Modality::Mri])
            .with_content(FAZEKAS),
            Entry::new(
                "mta-scheltens",
                "Medial Temporal Atrophy (Scheltens) Score",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Brain")
            .with_modality([Modality::Mri])
            .with_content(MTA),
            Entry::new("modic", "Modic Endplate Changes", CATEGORY, EntryKind::Informative)
                .with_subcategory("Spine")
                .with_modality([Modality::Mri])
                .with_content(MODIC),
            Entry::new(
                "pfirrmann",
                "Pfirrmann Disc Degeneration Grading",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Spine")
            .with_modality([Modality::Mri])
            .with_content(PFIRRMANN),
        ],
    )
}

const ASPECTS: &str = r#"<section class="ref-table" data-input="subtract">
<h3>ASPECTS</h3>
<p>Start from 10 and subtract one point for each MCA territory region with early ischemic change.</p>
<table>
<thead><tr><th>Level</th><th>Region</th><th>Early ischemic change</th></tr></thead>
<tbody>
<tr><td rowspan="7">Basal ganglia</td><td>C (caudate)</td><td><input type="checkbox" name="region" value="C"></td></tr>
<tr><td>L (lentiform nucleus)</td><td><input type="checkbox" name="region" value="L"></td></tr>
<tr><td>IC (internal capsule)</td><td><input type="checkbox" name="region" value="IC"></td></tr>
<tr><td>I (insular ribbon)</td><td><input type="checkbox" name="region" value="I"></td></tr>
<tr><td>M1 (anterior MCA cortex)</td><td><input type="checkbox" name="region" value="M1"></td></tr>
<tr><td>M2 (MCA cortex lateral to insula)</td><td><input type="checkbox" name="region" value="M2"></td></tr>
<tr><td>M3 (posterior MCA cortex)</td><td><input type="checkbox" name="region" value="M3"></td></tr>
<tr><td rowspan="3">Supraganglionic</td><td>M4 (anterior MCA territory above M1)</td><td><input type="checkbox" name="region" value="M4"></td></tr>
<tr><td>M5 (lateral MCA territory above M2)</td><td><input type="checkbox" name="region" value="M5"></td></tr>
<tr><td>M6 (posterior MCA territory above M3)</td><td><input type="checkbox" name="region" value="M6"></td></tr>
</tbody>
</table>
<output name="aspects-score"></output>
<p>A score &le;7 has been associated with worse functional outcome and higher risk of symptomatic hemorrhage after thrombolysis.</p>
<footer class="citation">
<p>Barber PA, Demchuk AM, Zhang J, Buchan AM. Validity and reliability of a quantitative computed tomography score in predicting outcome of hyperacute stroke before thrombolytic therapy. Lancet. 2000;355(9216):1670-1674.</p>
</footer>
</section>"#;

const FAZEKAS: &str = r#"<section class="ref-table">
<h3>Fazekas Scale</h3>
<table>
<thead><tr><th>Grade</th><th>Periventricular hyperintensity</th><th>Deep white matter hyperintensity</th></tr></thead>
<tbody>
<tr><td>0</td><td>Absent</td><td>Absent</td></tr>
<tr><td>1</td><td>Caps or pencil-thin lining</td><td>Punctate foci</td></tr>
<tr><td>2</td><td>Smooth halo</td><td>Beginning confluence of foci</td></tr>
<tr><td>3</td><td>Irregular hyperintensity extending into deep white matter</td><td>Large confluent areas</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Fazekas F, Chawluk JB, Alavi A, Hurtig HI, Zimmerman RA. MR signal abnormalities at 1.5 T in Alzheimer's dementia and normal aging. AJR Am J Roentgenol. 1987;149(2):351-356.</p>
</footer>
</section>"#;

const MTA: &str = r#"<section class="ref-table">
<h3>Medial Temporal Lobe Atrophy (MTA) Score</h3>
<p>Rated on coronal T1 images through the hippocampal body.</p>
<table>
<thead><tr><th>Score</th><th>Choroid fissure width</th><th>Temporal horn width</th><th>Hippocampal height</th></tr></thead>
<tbody>
<tr><td>0</td><td>Normal</td><td>Normal</td><td>Normal</td></tr>
<tr><td>1</td><td>Increased</td><td>Normal</td><td>Normal</td></tr>
<tr><td>2</td><td>Increased</td><td>Increased</td><td>Decreased</td></tr>
<tr><td>3</td><td>Markedly increased</td><td>Markedly increased</td><td>Markedly decreased</td></tr>
<tr><td>4</td><td>Markedly increased</td><td>Markedly increased</td><td>Severely decreased</td></tr>
</tbody>
</table>
<p>Abnormal: &ge;2 under age 75; &ge;3 at age 75 or older.</p>
<footer class="citation">
<p>Scheltens P, Leys D, Barkhof F, et al. Atrophy of medial temporal lobes on MRI in "probable" Alzheimer's disease and normal ageing. J Neurol Neurosurg Psychiatry. 1992;55(10):967-972.</p>
</footer>
</section>"#;

const MODIC: &str = r#"<section class="ref-table">
<h3>Modic Endplate Changes</h3>
<table>
<thead><tr><th>Type</th><th>T1</th><th>T2</th><th>Histology</th></tr></thead>
<tbody>
<tr><td>I</td><td>Hypointense</td><td>Hyperintense</td><td>Bone marrow edema and inflammation</td></tr>
<tr><td>II</td><td>Hyperintense</td><td>Iso- or hyperintense</td><td>Fatty marrow replacement</td></tr>
<tr><td>III</td><td>Hypointense</td><td>Hypointense</td><td>Subchondral bone sclerosis</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Modic MT, Steinberg PM, Ross JS, Masaryk TJ, Carter JR. Degenerative disk disease: assessment of changes in vertebral body marrow with MR imaging. Radiology. 1988;166(1 Pt 1):193-199.</p>
</footer>
</section>"#;

const PFIRRMANN: &str = r#"<section class="ref-table">
<h3>Pfirrmann Grading of Lumbar Disc Degeneration</h3>
<table>
<thead><tr><th>Grade</th><th>Structure</th><th>Nucleus/annulus distinction</th><th>T2 signal</th><th>Disc height</th></tr></thead>
<tbody>
<tr><td>I</td><td>Homogeneous, bright white</td><td>Clear</td><td>Hyperintense, isointense to CSF</td><td>Normal</td></tr>
<tr><td>II</td><td>Inhomogeneous with or without horizontal bands</td><td>Clear</td><td>Hyperintense, isointense to CSF</td><td>Normal</td></tr>
<tr><td>III</td><td>Inhomogeneous, gray</td><td>Unclear</td><td>Intermediate</td><td>Normal to slightly decreased</td></tr>
<tr><td>IV</td><td>Inhomogeneous, gray to black</td><td>Lost</td><td>Intermediate to hypointense</td><td>Normal to moderately decreased</td></tr>
<tr><td>V</td><td>Inhomogeneous, black</td><td>Lost</td><td>Hypointense</td><td>Collapsed disc space</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Pfirrmann CW, Metzdorf A, Zanetti M, Hodler J, Boos N. Magnetic resonance classification of lumbar intervertebral disc degeneration. Spine. 2001;26(17):1873-1878.</p>
</footer>
</section>"#;
