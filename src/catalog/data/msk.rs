use crate::catalog::identity::{EntryKind, Modality};
use crate::catalog::model::{Category, Entry};

const CATEGORY: &str = "msk";

pub(super) fn category() -> Category {
    Category::new(
        CATEGORY,
        "Musculoskeletal",
        "bone",
        vec![
            Entry::new(
                "kellgren-lawrence",
                "Kellgren-Lawrence Osteoarthritis Grading",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Joints")
            .with_modality([Modality::Xr])
            .with_content(KELLGREN_LAWRENCE),
            Entry::new(
                "salter-harris",
                "Salter-Harris Physeal Fracture Classification",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Pediatric")
            .with_modality([Modality::Xr])
            .with_content(SALTER_HARRIS),
            Entry::new(
                "garden",
                "Garden Classification (Femoral Neck Fractures)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Fractures")
            .with_modality([Modality::Xr, Modality::Ct])
            .with_content(GARDEN),
            Entry::new(
                "graf-hip",
                "Graf Classification (Infant Hip Ultrasound)",
                CATEGORY,
                EntryKind::Informative,
            )
            .with_subcategory("Pediatric")
            .with_modality([Modality::Us])
            .with_content(GRAF),
        ],
    )
}

const KELLGREN_LAWRENCE: &str = r#"<section class="ref-table">
<h3>Kellgren-Lawrence Grading</h3>
<table>
<thead><tr><th>Grade</th><th>Radiographic findings</th></tr></thead>
<tbody>
<tr><td>0</td><td>No radiographic features of osteoarthritis</td></tr>
<tr><td>1</td><td>Doubtful joint space narrowing and possible osteophytic lipping</td></tr>
<tr><td>2</td><td>Definite osteophytes and possible joint space narrowing</td></tr>
<tr><td>3</td><td>Moderate multiple osteophytes, definite joint space narrowing, some sclerosis, possible bone end deformity</td></tr>
<tr><td>4</td><td>Large osteophytes, marked joint space narrowing, severe sclerosis, definite bone end deformity</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Kellgren JH, Lawrence JS. Radiological assessment of osteo-arthrosis. Ann Rheum Dis. 1957;16(4):494-502.</p>
</footer>
</section>"#;

const SALTER_HARRIS: &str = r#"<section class="ref-table">
<h3>Salter-Harris Classification</h3>
<table>
<thead><tr><th>Type</th><th>Fracture line</th><th>Frequency</th></tr></thead>
<tbody>
<tr><td>I</td><td>Through the physis only (slipped)</td><td>~5%</td></tr>
<tr><td>II</td><td>Through the physis and metaphysis (above)</td><td>~75%</td></tr>
<tr><td>III</td><td>Through the physis and epiphysis (lower), intra-articular</td><td>~10%</td></tr>
<tr><td>IV</td><td>Through metaphysis, physis and epiphysis (through)</td><td>~10%</td></tr>
<tr><td>V</td><td>Crush injury of the physis (rammed)</td><td>&lt;1%</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Salter RB, Harris WR. Injuries Involving the Epiphyseal Plate. J Bone Joint Surg Am. 1963;45(3):587-622.</p>
</footer>
</section>"#;

const GARDEN: &str = r#"<section class="ref-table">
<h3>Garden Classification</h3>
<table>
<thead><tr><th>Type</th><th>Description</th><th>Stability</th></tr></thead>
<tbody>
<tr><td>I</td><td>Incomplete fracture, valgus impacted</td><td>Stable (non-displaced)</td></tr>
<tr><td>II</td><td>Complete fracture, non-displaced</td><td>Stable (non-displaced)</td></tr>
<tr><td>III</td><td>Complete fracture, partially displaced; trabeculae out of alignment</td><td>Unstable (displaced)</td></tr>
<tr><td>IV</td><td>Complete fracture, fully displaced; trabeculae parallel</td><td>Unstable (displaced)</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Garden RS. Low-angle fixation in fractures of the femoral neck. J Bone Joint Surg Br. 1961;43-B(4):647-663.</p>
</footer>
</section>"#;

const GRAF: &str = r#"<section class="ref-table">
<h3>Graf Classification of Developmental Dysplasia of the Hip</h3>
<table>
<thead><tr><th>Type</th><th>Alpha angle</th><th>Beta angle</th><th>Description</th></tr></thead>
<tbody>
<tr><td>I</td><td>&ge;60&deg;</td><td>&lt;55&deg;</td><td>Mature hip</td></tr>
<tr><td>IIa</td><td>50-59&deg;</td><td>&gt;55&deg;</td><td>Physiologically immature (&lt;3 months)</td></tr>
<tr><td>IIb</td><td>50-59&deg;</td><td>&gt;55&deg;</td><td>Delayed ossification (&gt;3 months)</td></tr>
<tr><td>IIc</td><td>43-49&deg;</td><td>&lt;77&deg;</td><td>Critical zone</td></tr>
<tr><td>D</td><td>43-49&deg;</td><td>&gt;77&deg;</td><td>Decentering hip</td></tr>
<tr><td>III</td><td>&lt;43&deg;</td><td>&gt;77&deg;</td><td>Dislocated, cartilaginous roof displaced upward</td></tr>
<tr><td>IV</td><td>&lt;43&deg;</td><td>&gt;77&deg;</td><td>Dislocated, cartilaginous roof displaced downward</td></tr>
</tbody>
</table>
<footer class="citation">
<p>Graf R. Fundamentals of sonographic diagnosis of infant hip dysplasia. J Pediatr Orthop. 1984;4(6):735-740.</p>
</footer>
</section>"#;
