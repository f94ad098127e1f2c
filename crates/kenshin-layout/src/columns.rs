//! The 540 destination columns, in output order.
//!
//! Every column is listed, including blank ones, so a column's position in
//! [`COLUMNS`] is its position in the output row. Columns 131, 331, 382,
//! 432 and 540 carry their own position as a literal.

use kenshin_model::fields::{self as f, FindingSlot};
use kenshin_model::Field;
use kenshin_transform::numeric::TumorMarker;
use kenshin_transform::{Vocabulary, tables};

use crate::column::{Column, Derive, Rule, Setting};
use crate::derive as d;

/// Number of columns in every output row.
pub const COLUMN_COUNT: usize = 540;

/// Examination and symptom text.
const SHORT: usize = 100;
/// Imaging finding text.
const IMAGING: usize = 240;
/// ECG, fundus and specific-checkup text.
const WIDE: usize = 256;

const fn blank(title: &'static str) -> Column {
    Column::new(title, Rule::Blank)
}

const fn literal(title: &'static str, text: &'static str) -> Column {
    Column::new(title, Rule::Literal(text))
}

const fn setting(title: &'static str, setting: Setting) -> Column {
    Column::new(title, Rule::Setting(setting))
}

const fn run_date(title: &'static str) -> Column {
    Column::new(title, Rule::RunDate)
}

const fn copy(title: &'static str, field: Field) -> Column {
    Column::new(title, Rule::Copy(field))
}

const fn numeric(title: &'static str, field: Field) -> Column {
    Column::new(title, Rule::Numeric(field))
}

const fn lookup(title: &'static str, field: Field, vocabulary: &'static Vocabulary) -> Column {
    Column::new(title, Rule::Lookup(field, vocabulary))
}

const fn judgement_code(title: &'static str, slot: FindingSlot) -> Column {
    Column::new(title, Rule::JudgementCode(slot.grade))
}

const fn judgement_name(title: &'static str, slot: FindingSlot) -> Column {
    Column::new(title, Rule::JudgementName(slot.grade))
}

const fn worse_judgement_code(title: &'static str, a: FindingSlot, b: FindingSlot) -> Column {
    Column::new(title, Rule::WorseJudgementCode(a.grade, b.grade))
}

const fn worse_judgement_name(title: &'static str, a: FindingSlot, b: FindingSlot) -> Column {
    Column::new(title, Rule::WorseJudgementName(a.grade, b.grade))
}

const fn presence(title: &'static str, slot: FindingSlot) -> Column {
    Column::new(title, Rule::Presence(slot.grade))
}

const fn finding_class(title: &'static str, field: Field) -> Column {
    Column::new(title, Rule::FindingClass(field))
}

const fn target(title: &'static str, field: Field) -> Column {
    Column::new(title, Rule::Target(field))
}

const fn acuity(title: &'static str, field: Field) -> Column {
    Column::new(title, Rule::Acuity(field))
}

const fn acuity_attribute(title: &'static str, field: Field) -> Column {
    Column::new(title, Rule::AcuityAttribute(field))
}

const fn hearing_db(title: &'static str, fields: &'static [Field]) -> Column {
    Column::new(title, Rule::HearingDb(fields))
}

const fn tumor_sign(title: &'static str, field: Field, marker: TumorMarker) -> Column {
    Column::new(title, Rule::TumorSign(field, marker))
}

const fn joined(title: &'static str, fields: &'static [Field]) -> Column {
    Column::new(title, Rule::Joined(fields))
}

const fn text(title: &'static str, fields: &'static [Field], limit: usize) -> Column {
    Column::new(
        title,
        Rule::Text {
            fields,
            limit,
            trim: false,
        },
    )
}

const fn trimmed_text(title: &'static str, fields: &'static [Field], limit: usize) -> Column {
    Column::new(
        title,
        Rule::Text {
            fields,
            limit,
            trim: true,
        },
    )
}

const fn derived(title: &'static str, derive: Derive) -> Column {
    Column::new(title, Rule::Derived(derive))
}

const fn companion(title: &'static str, derive: Derive) -> Column {
    Column::new(title, Rule::Companion(derive))
}

pub static COLUMNS: [Column; COLUMN_COUNT] = [
    // Submission and identification (1-)
    setting("CSVフォーマットVer", Setting::FormatVersion),
    setting("提出先", Setting::SubmissionTarget),
    setting("データ作成者", Setting::DataCreator),
    run_date("データ作成日"),
    run_date("データ提出日"),
    setting("データ登録完了区分", Setting::CompletionFlag),
    blank("登録未完了の連絡内容"),
    setting("団体コード", Setting::GroupCode),
    copy("団体コード名称", f::ORGANIZATION_NAME).required(f::ORGANIZATION_NAME),
    copy("事業所コード", f::OFFICE_CODE).required_unless_exempt(f::OFFICE_CODE),
    copy("事業所名称", f::OFFICE_NAME).required_unless_exempt(f::OFFICE_NAME),
    derived("個人ID", d::personal_id),
    copy("漢字氏名", f::NAME_KANJI).required(f::NAME_KANJI),
    copy("カナ氏名", f::NAME_KANA).required(f::NAME_KANA),
    derived("生年月日", d::birth_date).required(f::BIRTH_DATE),
    lookup("性別", f::SEX, &tables::SEX).required(f::SEX),
    copy("保険者番号", f::INSURER_NUMBER).required_unless_exempt(f::INSURER_NUMBER),
    copy("保険証記号", f::INSURANCE_SYMBOL).required_unless_exempt(f::INSURANCE_SYMBOL),
    copy("保険証番号", f::INSURANCE_NUMBER).required_unless_exempt(f::INSURANCE_NUMBER),
    blank("続柄"),
    blank("予備"),
    blank("予備"),
    copy("受診券整理番号", f::VOUCHER_NUMBER),
    copy("受診券有効期限", f::VOUCHER_EXPIRY),
    derived("コースコード", d::course_code),
    companion("コース名称", d::course_name),
    derived("受診日", d::exam_day).required(f::EXAM_DATE),
    lookup("施設/巡回区分", f::FACILITY, &tables::FACILITY).required(f::FACILITY),
    blank("健診機関コード"),
    setting("健診機関名称", Setting::FacilityName),
    setting("[Met]特定健診機関番号", Setting::FacilityNumber),
    setting("[Met]健診実施医師名", Setting::Physician),
    blank("予備"),
    blank("予備"),

    // Examination and overall judgement (35-)
    blank("産業医判定区分"),
    blank("就労区分"),
    blank("産業医コメント"),
    blank("伝達事項有無"),
    blank("伝達内容"),
    judgement_code("診察判定区分コード", f::PHYSICAL_EXAM),
    judgement_name("診察判定区分名称", f::PHYSICAL_EXAM),
    blank("（予備）留意所見有無区分"),
    text("診察所見", &f::EXAM_FINDINGS, SHORT),
    text("自覚症状など", &f::SYMPTOMS, SHORT),
    derived("治療中疾病有無区分", d::treatment_flag),
    derived("治療中疾病名（文字）", d::treatment_names),
    derived("既往疾病有無区分", d::history_flag),
    derived("既往疾病名", d::history_names),
    judgement_code("総合判定区分コード", f::OVERALL),
    judgement_name("総合判定区分名称", f::OVERALL),
    derived("総合判定コメント", d::overall_comment),

    // Reserved and other judgements (52-)
    blank("予備"),
    blank("予備"),
    blank("予備①(1)"),
    blank("予備②(1)"),
    blank("予備③(1)"),
    blank("予備①(2)"),
    blank("予備②(2)"),
    blank("予備③(2)"),
    blank("予備①(3)"),
    blank("予備②(3)"),
    blank("予備③(3)"),
    blank("予備①(4)"),
    blank("予備②(4)"),
    blank("予備③(4)"),
    blank("予備①(5)"),
    blank("予備②(5)"),
    blank("予備③(5)"),
    blank("予備①(6)"),
    blank("予備②(6)"),
    blank("予備③(6)"),
    blank("予備①(7)"),
    blank("予備②(7)"),
    blank("予備③(7)"),
    blank("予備①(8)"),
    blank("予備②(8)"),
    blank("予備③(8)"),
    blank("予備①(9)"),
    blank("予備②(9)"),
    blank("予備③(9)"),
    blank("予備①(10)"),
    blank("予備②(10)"),
    blank("予備③(10)"),
    blank("予備①(11)"),
    blank("予備②(11)"),
    blank("予備③(11)"),
    blank("予備①(12)"),
    blank("予備②(12)"),
    blank("予備③(12)"),
    blank("予備①(13)"),
    blank("予備②(13)"),
    blank("予備③(13)"),
    blank("予備①(14)"),
    blank("予備②(14)"),
    blank("予備③(14)"),
    blank("予備①(15)"),
    blank("予備②(15)"),
    blank("予備③(15)"),
    blank("予備①(16)"),
    blank("予備②(16)"),
    blank("予備③(16)"),
    blank("予備①(17)"),
    blank("予備②(17)"),
    blank("予備③(17)"),
    blank("予備①(18)"),
    blank("予備②(18)"),
    blank("予備③(18)"),
    blank("予備①(19)"),
    blank("予備②(19)"),
    blank("予備③(19)"),
    blank("予備①(20)"),
    blank("予備②(20)"),
    blank("予備③(20)"),
    blank("予備①(21)"),
    blank("予備②(21)"),
    blank("予備③(21)"),
    blank("予備①(22)"),
    blank("予備②(22)"),
    blank("予備③(22)"),
    blank("予備①(23)"),
    blank("予備②(23)"),
    blank("予備③(23)"),
    blank("予備①(24)"),
    blank("予備②(24)"),
    blank("予備③(24)"),
    blank("予備"),
    blank("予備"),
    blank("その他判定区分コード"),
    blank("その他判定区分名称"),
    blank("その他データ内容"),
    literal("カンマ位置(131)", "131"),

    // Body measurements, vision, hearing and blood pressure (132-)
    copy("身長", f::HEIGHT),
    copy("体重", f::WEIGHT),
    copy("BMI", f::BMI),
    copy("腹囲", f::WAIST),
    copy("体脂肪率", f::BODY_FAT),
    blank("内臓脂肪面積"),
    acuity("5m視力裸眼右", f::ACUITY_FAR_NAKED_RIGHT),
    acuity_attribute("　データ属性", f::ACUITY_FAR_NAKED_RIGHT),
    acuity("5m視力裸眼左", f::ACUITY_FAR_NAKED_LEFT),
    acuity_attribute("　データ属性", f::ACUITY_FAR_NAKED_LEFT),
    acuity("5m視力矯正右", f::ACUITY_FAR_CORRECTED_RIGHT),
    acuity_attribute("　データ属性", f::ACUITY_FAR_CORRECTED_RIGHT),
    acuity("5m視力矯正左", f::ACUITY_FAR_CORRECTED_LEFT),
    acuity_attribute("　データ属性", f::ACUITY_FAR_CORRECTED_LEFT),
    acuity("近点視力裸眼右", f::ACUITY_NEAR_NAKED_RIGHT),
    acuity_attribute("　データ属性", f::ACUITY_NEAR_NAKED_RIGHT),
    acuity("近点視力裸眼左", f::ACUITY_NEAR_NAKED_LEFT),
    acuity_attribute("　データ属性", f::ACUITY_NEAR_NAKED_LEFT),
    acuity("近点視力矯正右", f::ACUITY_NEAR_CORRECTED_RIGHT),
    acuity_attribute("　データ属性", f::ACUITY_NEAR_CORRECTED_RIGHT),
    acuity("近点視力矯正左", f::ACUITY_NEAR_CORRECTED_LEFT),
    acuity_attribute("　データ属性", f::ACUITY_NEAR_CORRECTED_LEFT),
    derived("視力矯正区分", d::acuity_correction),
    finding_class("聴力右1K所見区分", f::HEARING_1K_GRADE_RIGHT),
    hearing_db("聴力右1K(dB)", &[f::HEARING_1K_DB_RIGHT]),
    finding_class("聴力左1K所見区分", f::HEARING_1K_GRADE_LEFT),
    hearing_db("聴力左1K(dB)", &[f::HEARING_1K_DB_LEFT]),
    derived("聴力右4K所見区分", d::hearing_4k_right),
    hearing_db("聴力右4K(dB)", &f::HEARING_4K_DB_RIGHT),
    derived("聴力左4K所見区分", d::hearing_4k_left),
    hearing_db("聴力左4K(dB)", &f::HEARING_4K_DB_LEFT),
    derived("聴力会話法", d::hearing_by_conversation),
    copy("聴力所見（文字）", f::HEARING_REMARK),
    derived("収縮期血圧（報告値）", d::reported_systolic),
    companion("拡張期血圧（報告値）", d::reported_diastolic),
    copy("収縮期血圧1回目", f::BP_FIRST_SYSTOLIC),
    copy("拡張期血圧1回目", f::BP_FIRST_DIASTOLIC),
    copy("収縮期血圧2回目", f::BP_SECOND_SYSTOLIC),
    copy("拡張期血圧2回目", f::BP_SECOND_DIASTOLIC),
    blank("脈拍数"),

    // ECG, chest, sputum and lung function (172-)
    blank("心電図実施区分"),
    blank("心電図未実施理由"),
    judgement_code("心電図判定区分コード", f::ECG),
    judgement_name("心電図判定区分名称", f::ECG),
    blank("（予備）留意所見有無区分"),
    text("心電図所見（文字）", &f::ECG_FINDINGS, WIDE),
    copy("心拍数", f::HEART_RATE),
    presence("[Met]心電図所見有無", f::ECG),
    target("[Met]心電図対象者", f::ECG.grade),
    blank("[Met]心電図実施理由"),
    blank("胸部X線実施区分"),
    blank("胸部X線未実施理由"),
    derived("胸部X線撮影区分", d::chest_imaging),
    judgement_code("胸部X線判定区分コード", f::CHEST_XRAY),
    judgement_name("胸部X線判定区分名称", f::CHEST_XRAY),
    blank("（予備）留意所見有無区分"),
    text("胸部X線部位・所見（文字）", &f::CHEST_XRAY_FINDINGS, IMAGING),
    blank("心胸比"),
    presence("[Met]胸部X線所見有無", f::CHEST_XRAY),
    blank("胸部CT実施区分"),
    blank("胸部CT未実施理由"),
    derived("胸部CT判定区分コード", d::ct_judgement_code),
    companion("胸部CT判定区分名称", d::ct_judgement_name),
    blank("（予備）留意所見有無区分"),
    derived("胸部CT部位・所見（文字）", d::ct_findings),
    blank("喀痰実施区分"),
    blank("喀痰未実施理由"),
    derived("喀痰判定区分コード", d::sputum_code),
    companion("喀痰判定区分名称", d::sputum_name),
    companion("喀痰細胞診結果", d::sputum_class),
    blank("喀痰細胞診所見（文字）"),
    blank("《予備》喀痰（抗酸菌）"),
    blank("《予備》喀痰培養（ガフキー）"),
    copy("肺活量", f::VITAL_CAPACITY),
    copy("１秒量", f::FEV1),
    copy("努力肺活量", f::FORCED_VITAL_CAPACITY),
    copy("１秒率", f::FEV1_RATIO),
    copy("％肺活量", f::PERCENT_VITAL_CAPACITY),
    copy("％１秒量", f::PERCENT_FEV1),
    blank("肺機能換気障害区分"),

    // Fundus and abdominal ultrasound (212-)
    blank("眼底実施区分"),
    blank("眼底未実施理由"),
    judgement_code("眼底判定区分", f::FUNDUS),
    judgement_name("眼底判定区分名称", f::FUNDUS),
    derived("眼底右シェイエ", d::scheie_right),
    derived("眼底左シェイエ", d::scheie_left),
    blank("予備（眼底）"),
    blank("予備（眼底）"),
    lookup("眼底右Scott", f::FUNDUS_SCOTT_RIGHT, &tables::SCOTT),
    lookup("眼底左Scott", f::FUNDUS_SCOTT_LEFT, &tables::SCOTT),
    lookup("眼底右KW", f::FUNDUS_KW_RIGHT, &tables::KEITH_WAGENER),
    lookup("眼底左KW", f::FUNDUS_KW_LEFT, &tables::KEITH_WAGENER),
    blank("眼底右Wong-Mitchell"),
    blank("眼底左Wong-Mitchell"),
    blank("眼底右Davis"),
    blank("眼底左Davis"),
    trimmed_text("眼底右その他所見（文字）", &f::FUNDUS_OTHER, WIDE),
    blank("眼底左その他所見（文字）"),
    target("[Met]眼底検査（対象者）", f::FUNDUS.grade),
    blank("[Met]眼底検査（実施理由）"),
    blank("予備"),
    copy("眼圧右", f::EYE_PRESSURE_RIGHT),
    copy("眼圧左", f::EYE_PRESSURE_LEFT),
    blank("腹部超音波実施区分"),
    blank("腹部超音波未実施理由"),
    judgement_code("腹部超音波判定区分コード", f::ABDOMINAL_ECHO),
    judgement_name("腹部超音波判定区分名称", f::ABDOMINAL_ECHO),
    blank("（予備）留意所見有無区分"),
    text("腹部超音波部位・所見（文字）", &f::ABDOMINAL_ECHO_FINDINGS, IMAGING),

    // Urine and blood (241-)
    lookup("尿糖定性", f::URINE_GLUCOSE, &tables::QUALITATIVE),
    lookup("尿蛋白定性", f::URINE_PROTEIN, &tables::QUALITATIVE),
    lookup("尿潜血定性", f::URINE_OCCULT_BLOOD, &tables::QUALITATIVE),
    lookup("尿ウロビリノーゲン定性", f::URINE_UROBILINOGEN, &tables::QUALITATIVE),
    copy("尿比重", f::URINE_GRAVITY),
    copy("尿pH", f::URINE_PH),
    judgement_code("尿沈渣判定区分コード", f::URINE_SEDIMENT),
    judgement_name("尿沈渣判定区分名称", f::URINE_SEDIMENT),
    copy("尿沈渣赤血球", f::SEDIMENT_RBC),
    copy("尿沈渣白血球", f::SEDIMENT_WBC),
    copy("尿沈渣扁平上皮", f::SEDIMENT_SQUAMOUS),
    copy("尿沈渣顆粒円柱", f::SEDIMENT_GRANULAR_CAST),
    copy("尿沈渣ガラス円柱", f::SEDIMENT_HYALINE_CAST),
    derived("尿沈渣細菌", d::sediment_bacteria),
    derived("尿沈渣その他", d::sediment_other),
    numeric("赤血球数", f::RBC),
    numeric("血色素量", f::HEMOGLOBIN),
    numeric("ヘマトクリット", f::HEMATOCRIT),
    numeric("白血球数", f::WBC),
    numeric("血小板数", f::PLATELETS),
    numeric("MCV", f::MCV),
    numeric("MCH", f::MCH),
    numeric("MCHC", f::MCHC),
    blank("[Met]貧血検査（実施理由）"),
    judgement_code("血液像判定区分コード", f::DIFFERENTIAL),
    judgement_name("血液像判定区分名称", f::DIFFERENTIAL),
    numeric("好中球(Neut)", f::NEUTROPHIL),
    numeric("棹状核球(Stab)", f::BAND),
    numeric("分葉核球(Seg)", f::SEGMENTED),
    numeric("好酸球(Eosino)", f::EOSINOPHIL),
    numeric("好塩基球(Baso)", f::BASOPHIL),
    numeric("リンパ球(Lympho)", f::LYMPHOCYTE),
    numeric("単球(Mono)", f::MONOCYTE),
    blank("異形リンパ球(A-Lympho)"),
    blank("骨髄球(Myelo)"),
    blank("後骨髄球(Meta)"),
    blank("白血球分画その他"),
    joined("その他の内容", &f::DIFFERENTIAL_OTHER),
    numeric("血清鉄", f::SERUM_IRON),
    numeric("フェリチン", f::FERRITIN),
    lookup("血液型ABO", f::BLOOD_TYPE_ABO, &tables::BLOOD_TYPE_ABO),
    lookup("血液型Rh", f::BLOOD_TYPE_RH, &tables::BLOOD_TYPE_RH),
    derived("食後時間区分", d::meal_timing_code),
    lookup("生理区分", f::MENSTRUATION, &tables::MENSTRUATION),
    derived("妊娠区分", d::pregnancy),
    derived("乳び", d::chyle),
    derived("溶血", d::hemolysis),
    numeric("血清総蛋白", f::TOTAL_PROTEIN),
    numeric("血清アルブミン", f::ALBUMIN),
    numeric("A/G比", f::AG_RATIO),
    blank("尿中アルブミン"),
    numeric("AST(GOT)", f::AST),
    numeric("ALT(GPT)", f::ALT),
    numeric("γ-GTP", f::GGT),
    numeric("ALP", f::ALP),
    numeric("LDH", f::LDH),
    numeric("コリンエステラーゼ", f::CHOLINESTERASE),
    numeric("LAP", f::LAP),
    numeric("総ビリルビン", f::TOTAL_BILIRUBIN),
    numeric("直接ビリルビン", f::DIRECT_BILIRUBIN),
    numeric("CPK", f::CPK),
    blank("　レベル区分"),
    numeric("BNP", f::BNP),
    blank("　レベル区分"),
    numeric("総コレステロール", f::TOTAL_CHOLESTEROL),
    numeric("HDLコレステロール", f::HDL),
    numeric("LDLコレステロール", f::LDL),
    numeric("中性脂肪", f::TRIGLYCERIDE),
    numeric("non-HDLコレステロール", f::NON_HDL),
    derived("空腹時血糖", d::fasting_glucose),
    companion("随時血糖", d::casual_glucose),
    numeric("HbA1c(NGSP)", f::HBA1C),
    judgement_code("膵機能判定区分コード", f::PANCREAS),
    judgement_name("膵機能判定区分名称", f::PANCREAS),
    numeric("血清アミラーゼ", f::AMYLASE),
    blank("　レベル区分"),
    blank("膵アミラーゼ"),
    blank("　レベル区分"),
    numeric("尿酸", f::URIC_ACID),
    numeric("尿素窒素", f::BUN),
    numeric("血清クレアチニン", f::CREATININE),
    numeric("eGFR", f::EGFR),
    target("[Met]血清クレアチニン対象", f::CREATININE),
    blank("[Met]血清クレアチニン実施理由"),
    numeric("ナトリウム", f::SODIUM),
    numeric("カリウム", f::POTASSIUM),
    numeric("クロール", f::CHLORIDE),
    numeric("カルシウム", f::CALCIUM),
    blank("マグネシウム"),
    numeric("無機リン", f::PHOSPHORUS),
    literal("カンマ位置(331)", "331"),

    // Serology, tumor markers and thyroid (332-)
    blank("肝炎判定区分コード"),
    blank("肝炎判定区分名称"),
    lookup("HBs抗原定性", f::HBS_ANTIGEN, &tables::QUALITATIVE),
    lookup("HBs抗体定性", f::HBS_ANTIBODY, &tables::QUALITATIVE),
    lookup("HCV抗体定性", f::HCV_ANTIBODY, &tables::QUALITATIVE),
    numeric("HBs抗原定量", f::HBS_ANTIGEN_TITER),
    blank("　HBs抗原定量　陰・陽区分"),
    numeric("HBs抗体定量", f::HBS_ANTIBODY_TITER),
    blank("　HBs抗体定量　陰・陽区分"),
    numeric("HCV抗体定量", f::HCV_ANTIBODY_TITER),
    blank("　HCV抗体定量　陰・陽区分"),
    blank("CRP定性"),
    numeric("CRP定量", f::CRP),
    blank("　CRP定量　陰・陽区分"),
    blank("高感度CRP"),
    blank("　高感度CRP定量　陰・陽区分"),
    blank("RA(RF)定性"),
    numeric("RF定量", f::RF),
    blank("　RF定量　陰・陽区分"),
    blank("梅毒　総　陰・陽区分"),
    lookup("梅毒反応(TPHA)　定性", f::TPHA, &tables::QUALITATIVE),
    blank("梅毒反応(TPHA)　定量"),
    blank("　TPHA定量　陰・陽区分"),
    lookup("梅毒反応(RPR)　定性", f::RPR, &tables::QUALITATIVE),
    blank("梅毒反応(ガラス板)　定性"),
    blank("PSA定性"),
    numeric("PSA定量", f::PSA),
    tumor_sign("　PSA定量　陰・陽区分", f::PSA, TumorMarker::Psa),
    numeric("CA125", f::CA125),
    tumor_sign("　CA125　陰・陽区分", f::CA125, TumorMarker::Ca125),
    numeric("CA19_9", f::CA19_9),
    tumor_sign("　CA19_9　陰・陽区分", f::CA19_9, TumorMarker::Ca19_9),
    numeric("CEA", f::CEA),
    tumor_sign("　CEA　陰・陽区分", f::CEA, TumorMarker::Cea),
    numeric("AFP", f::AFP),
    tumor_sign("　AFP　陰・陽区分", f::AFP, TumorMarker::Afp),
    numeric("シフラ", f::CYFRA),
    tumor_sign("　シフラ　陰・陽区分", f::CYFRA, TumorMarker::Cyfra),
    numeric("TSH", f::TSH),
    blank("　レベル区分"),
    blank("T3"),
    blank("　レベル区分"),
    blank("T4"),
    blank("　レベル区分"),
    numeric("FT3", f::FT3),
    blank("　レベル区分"),
    numeric("FT4", f::FT4),
    blank("　レベル区分"),
    lookup("便中卵定性", f::STOOL_OVA, &tables::QUALITATIVE),
    blank("便中卵所見"),
    literal("カンマ位置(382)", "382"),

    // Gastric, pepsinogen and fecal (383-)
    blank("胃部X線実施区分"),
    blank("胃部X線未実施理由"),
    judgement_code("胃部X線判定区分コード", f::GASTRIC_XRAY),
    judgement_name("胃部X線判定区分名称", f::GASTRIC_XRAY),
    blank("（予備）留意所見有無区分"),
    derived("胃部X線撮影区分", d::gastric_imaging),
    text("胃部X線部位・所見（文字）", &f::GASTRIC_XRAY_FINDINGS, IMAGING),
    blank("胃カメラ実施区分"),
    blank("胃カメラ未実施理由"),
    judgement_code("胃カメラ判定区分コード", f::ENDOSCOPY),
    judgement_name("胃カメラ判定区分名称", f::ENDOSCOPY),
    blank("（予備）留意所見有無区分"),
    text("胃部内視鏡部位・所見（文字）", &f::ENDOSCOPY_FINDINGS, IMAGING),
    blank("胃部内視鏡組織検査実施区分"),
    text("胃部内視鏡組織・生検所見", &f::BIOPSY_FINDINGS, IMAGING),
    worse_judgement_code("PG・ピロリ判定区分コード", f::PYLORI, f::PEPSINOGEN),
    worse_judgement_name("PG・ピロリ判定区分名称", f::PYLORI, f::PEPSINOGEN),
    lookup("ABC検診判定分類", f::GASTRIC_ABC, &tables::GASTRIC_ABC),
    numeric("PGⅠ", f::PEPSINOGEN_1),
    numeric("PGⅡ", f::PEPSINOGEN_2),
    numeric("PGⅠ/Ⅱ比", f::PEPSINOGEN_RATIO),
    blank("PG比　陰・陽区分"),
    numeric("ピロリIgG抗体定量", f::PYLORI_TITER),
    lookup("ピロリIgG抗体定量　陰・陽区分", f::PYLORI_QUALITATIVE, &tables::QUALITATIVE),
    blank("尿中ピロリ菌抗体定性"),
    blank("呼気ピロリ菌抗体定性"),
    blank("PGに関する所見"),
    blank("大腸内視鏡実施区分"),
    blank("大腸内視鏡未実施理由"),
    blank("大腸内視鏡判定区分コード"),
    blank("大腸内視鏡判定区分名称"),
    blank("（予備）留意所見有無区分"),
    blank("大腸内視鏡部位・所見（文字）"),
    blank("直腸診実施区分"),
    blank("直腸診未実施区分"),
    blank("直腸診判定区分コード"),
    blank("直腸診判定区分名称"),
    blank("（予備）留意所見有無区分"),
    blank("直腸診部位・所見（文字）"),
    blank("便潜血実施区分"),
    blank("便潜血未実施理由"),
    judgement_code("便潜血判定区分コード", f::FECAL),
    judgement_name("便潜血判定区分名称", f::FECAL),
    lookup("便潜血１回目（定性）", f::FECAL_BLOOD[0], &tables::QUALITATIVE),
    lookup("便潜血２回目（定性）", f::FECAL_BLOOD[1], &tables::QUALITATIVE),
    blank("便潜血１回目定量"),
    blank("　１回目定量　陰・陽区分"),
    blank("便潜血２回目定量"),
    blank("　２回目定量　陰・陽区分"),
    literal("カンマ位置(432)", "432"),

    // Breast, cervical, bone, cardiac, carotid and thyroid (433-)
    worse_judgement_code("乳がん総判定区分コード", f::BREAST_ECHO, f::MAMMOGRAPHY),
    worse_judgement_name("乳がん総判定区分名称", f::BREAST_ECHO, f::MAMMOGRAPHY),
    blank("（予備）留意所見有無区分"),
    blank("乳がん総合所見（文字）"),
    blank("乳房視触診（文字）"),
    blank("乳腺エコー実施区分"),
    blank("乳腺エコー未実施理由"),
    judgement_code("乳腺エコー判定区分コード", f::BREAST_ECHO),
    judgement_name("乳腺エコー判定区分名称", f::BREAST_ECHO),
    blank("（予備）留意所見有無区分"),
    text("乳腺エコー所見（文字）", &f::BREAST_ECHO_FINDINGS, IMAGING),
    blank("マンモ実施区分"),
    blank("マンモ未実施理由"),
    judgement_code("マンモ判定区分コード", f::MAMMOGRAPHY),
    judgement_name("マンモ判定区分名称", f::MAMMOGRAPHY),
    blank("（予備）留意所見有無区分"),
    derived("マンモ撮影方向", d::mammography_direction),
    text("マンモ所見（文字）", &f::MAMMOGRAPHY_FINDINGS, IMAGING),
    blank("子宮頸部細胞診実施区分"),
    blank("子宮頸部細胞診未実施区分"),
    worse_judgement_code("子宮頸部細胞診判定区分コード", f::PELVIC_EXAM, f::CERVICAL_CYTOLOGY),
    worse_judgement_name("子宮頸部細胞診判定区分名称", f::PELVIC_EXAM, f::CERVICAL_CYTOLOGY),
    blank("（予備）留意所見有無区分"),
    text("子宮内診所見（文字）", &f::PELVIC_EXAM_FINDINGS, IMAGING),
    lookup("子宮頸部細胞診（ベセスダ）", f::CERVICAL_BETHESDA, &tables::BETHESDA),
    lookup("子宮頸部細胞診（日母分類）", f::CERVICAL_JSOG, &tables::JSOG_CLASS),
    blank("子宮頸部細胞診結果"),
    blank("HPV"),
    blank("子宮超音波実施区分"),
    blank("子宮超音波未実施理由"),
    blank("子宮超音波判定区分コード"),
    blank("子宮超音波判定区分名称"),
    blank("（予備）留意所見有無区分"),
    blank("子宮超音波所見（文字）"),
    numeric("骨密度(BMD)", f::BONE_DENSITY),
    blank("YAM"),
    blank("同性年代平均値比"),
    blank("骨密度検査その他"),
    blank("心臓超音波実施区分"),
    blank("心臓超音波未実施理由"),
    judgement_code("心臓超音波判定区分コード", f::CARDIAC_ECHO),
    judgement_name("心臓超音波判定区分名称", f::CARDIAC_ECHO),
    text("心臓超音波所見（文字）", &f::CARDIAC_ECHO_FINDINGS, IMAGING),
    numeric("ABI 右", f::ABI_RIGHT),
    numeric("ABI 左", f::ABI_LEFT),
    blank("PWV 右"),
    blank("PWV 左"),
    numeric("CAVI 右", f::CAVI_RIGHT),
    numeric("CAVI 左", f::CAVI_LEFT),
    blank("脳ドック実施区分"),
    blank("脳ドック検査種別"),
    blank("脳ドック総判定区分コード"),
    blank("脳ドック総判定区分名称"),
    blank("（予備）留意所見有無区分"),
    blank("脳ドック所見（文字）"),
    blank("頸動脈超音波実施区分"),
    judgement_code("頸動脈超音波判定区分コード", f::CAROTID_ECHO),
    judgement_name("頸動脈超音波判定区分名称", f::CAROTID_ECHO),
    blank("（予備）留意所見有無区分"),
    text("頸動脈超音波所見（文字）", &f::CAROTID_ECHO_FINDINGS, IMAGING),
    blank("甲状腺超音波実施区分"),
    judgement_code("甲状腺超音波判定区分コード", f::THYROID_ECHO),
    judgement_name("甲状腺超音波判定区分名称", f::THYROID_ECHO),
    blank("（予備）留意所見有無区分"),
    text("甲状腺超音波部位所見（文字）", &f::THYROID_ECHO_FINDINGS, IMAGING),

    // Specific health checkup (498-)
    derived("[Met]既往歴有無", d::checkup_history_flag),
    derived("[Met]具体的な既往歴", d::checkup_history_text),
    derived("[Met]自覚症状の有無", d::symptoms_flag),
    derived("[Met]具体的な自覚症状", d::symptoms_text),
    derived("[Met]他覚症状の有無", d::exam_findings_flag),
    derived("[Met]具体的な他覚症状", d::exam_findings_text),
    lookup("[Met]高血圧（服薬有無）", f::MEDICATION_HYPERTENSION, &tables::YES_NO),
    blank("[Met]高血圧（薬剤名）"),
    blank("[Met]高血圧（服薬理由）"),
    lookup("[Met]糖尿病（服薬有無）", f::MEDICATION_DIABETES, &tables::YES_NO),
    blank("[Met]糖尿病（薬剤名）"),
    blank("[Met]糖尿病（服薬理由）"),
    lookup("[Met]脂質（服薬有無）", f::MEDICATION_LIPIDS, &tables::YES_NO),
    blank("[Met]脂質（薬剤名）"),
    blank("[Met]脂質（服薬理由）"),
    lookup("[Met]既往歴１（脳血管有無）", f::HISTORY_CEREBROVASCULAR, &tables::YES_NO),
    lookup("[Met]既往歴２（心血管有無）", f::HISTORY_CARDIOVASCULAR, &tables::YES_NO),
    lookup("[Met]既往歴３（腎不全・人口透析有無）", f::HISTORY_RENAL, &tables::YES_NO),
    lookup("[Met]貧血既往有無", f::HISTORY_ANEMIA, &tables::YES_NO),
    lookup("[Met]習慣的喫煙", f::SMOKING, &tables::YES_NO),
    blank("[Met]喫煙本数／日"),
    blank("[Met]喫煙期間（年）"),
    lookup("[Met]20歳からの体重変化", f::WEIGHT_GAIN, &tables::YES_NO),
    lookup("[Met]30分以上の運動習慣", f::EXERCISE, &tables::YES_NO),
    lookup("[Met]歩行又は身体活動", f::PHYSICAL_ACTIVITY, &tables::YES_NO),
    lookup("[Met]歩行速度", f::WALKING_SPEED, &tables::YES_NO),
    lookup("[Met]咀嚼", f::CHEWING, &tables::CHEWING),
    lookup("[Met]食べ方１（早食い等）", f::EATING_SPEED, &tables::EATING_SPEED),
    lookup("[Met]食べ方２（就寝前）", f::LATE_DINNER, &tables::YES_NO),
    lookup("[Met]食べ方３（間食）", f::SNACKING, &tables::SNACKING),
    lookup("[Met]食習慣（朝食）", f::SKIPS_BREAKFAST, &tables::YES_NO),
    lookup("[Met]飲酒習慣", f::DRINKING_FREQUENCY, &tables::DRINKING_FREQUENCY),
    lookup("[Met]飲酒量", f::DRINKING_AMOUNT, &tables::DRINKING_AMOUNT),
    lookup("[Met]睡眠", f::SLEEP, &tables::YES_NO),
    lookup("[Met]生活習慣の改善意志", f::LIFESTYLE_INTENTION, &tables::LIFESTYLE_INTENTION),
    lookup("[Met]保健指導の希望", f::GUIDANCE_WANTED, &tables::YES_NO),
    lookup("[Met]保健指導レベル", f::GUIDANCE_LEVEL, &tables::GUIDANCE_LEVEL),
    lookup("[Met]メタボリックシンドローム判定", f::METABOLIC_SYNDROME, &tables::METABOLIC_SYNDROME),
    copy("[Met]医師の診断（特定健診）", f::DIAGNOSIS),
    blank("初回面接実施"),
    blank("初回面接補足内容"),
    blank("情報提供の方法"),
    literal("カンマ位置(540)", "540"),
];
