//! Fixed survey content: the 54 rated leadership questions (numbered 2-55)
//! and the strength/opportunity labels offered for ranking.

/// Inclusive range of rated question numbers.
pub const FIRST_QUESTION: u8 = 2;
pub const LAST_QUESTION: u8 = 55;

pub const RANKINGS_PER_CATEGORY: usize = 5;

pub fn question_numbers() -> impl Iterator<Item = u8> {
    FIRST_QUESTION..=LAST_QUESTION
}

pub fn question_count() -> usize {
    (LAST_QUESTION - FIRST_QUESTION + 1) as usize
}

pub fn question_text(number: u8) -> Option<&'static str> {
    if !(FIRST_QUESTION..=LAST_QUESTION).contains(&number) {
        return None;
    }
    Some(QUESTION_TEXTS[(number - FIRST_QUESTION) as usize])
}

const QUESTION_TEXTS: [&str; 54] = [
    "This leader communicates a clear vision for the school's future.",
    "This leader allocates resources (financial, human, and/or time) to support the school's vision.",
    "This leader integrates the school's core values into the daily operations of the campus.",
    "This leader ensures diverse stakeholders are respected and represented within the school environment.",
    "This leader supports the recruitment of a diverse staff that mirrors the student population.",
    "This leader models the school's core values in all aspects of leadership.",
    "This leader fosters open communication among others.",
    "This leader cultivates an inclusive school culture where everyone feels valued.",
    "This leader implements and evaluates a comprehensive safety and security plan.",
    "This leader provides training or resources to recognize and respond effectively to potential safety threats, including bullying, harassment, and violence.",
    "This leader promotes a sense of ownership and responsibility among others.",
    "This leader promotes the development of leadership in others.",
    "This leader is supportive of district priorities and/or initiatives.",
    "This leader uses research and/or best practices to improve curriculum and instruction.",
    "This leader ensures professional development experiences translate into improved practice.",
    "This leader promotes a culture of continuous learning and growth.",
    "This leader advocates for school resources and support.",
    "This leader is transparent with pertinent information.",
    "This leader models ethical behavior.",
    "This leader places students at the center of educational decisions.",
    "This leader seeks to understand others.",
    "This leader proactively communicates information.",
    "This leader is positive in their demeanor.",
    "This leader builds positive relationships with all members of the school community.",
    "This leader effectively resolves conflicts in a manner that promotes mutual understanding.",
    "This leader builds consensus to achieve common goals.",
    "This leader navigates challenging situations while maintaining positive relationships.",
    "This leader advocates for students' needs and rights, even in the face of resistance.",
    "This leader takes personal responsibility to advance student success.",
    "This leader seeks ways to include families and community members in the school community.",
    "This leader collaborates with local organizations to address the broader needs of students and families.",
    "This leader ensures school policies, practices, and programs are inclusive and equitable for everyone.",
    "This leader fosters a culture of inclusivity and diversity within the school community.",
    "This leader communicates instructional goals to staff, students, and parents.",
    "This leader ensures alignment between curriculum, instruction, and assessment within the school.",
    "This leader promotes a culture of differentiated instruction to meet the diverse needs of students.",
    "This leader provides opportunities for teachers to enhance their understanding and implementation of the curriculum.",
    "This leader monitors curriculum implementation and student outcomes to ensure continuous improvement.",
    "This leader views feedback as an opportunity for improvement.",
    "This leader helps teachers improve instruction.",
    "This leader uses feedback mechanisms (surveys, focus groups, etc.) to improve.",
    "This leader collaborates with others to identify priority areas for school improvement.",
    "This leader communicates updates and successes regarding school improvement efforts.",
    "This leader works with others to establish and accomplish school goals.",
    "This leader supports using a variety of assessment methods to measure student progress and learning.",
    "This leader uses assessment data to improve student achievement.",
    "This leader fosters a culture of collaboration among teachers to share teaching strategies and best practices.",
    "This leader fosters a work environment that values the contributions of all staff members.",
    "This leader seeks out and secures additional funding to enhance programs and services.",
    "This leader provides effective resources to support campus instructional needs.",
    "This leader aligns the school budget with campus goals.",
    "This leader supports the integration of technology into teaching and learning practices.",
    "This leader inspires and empowers others to pursue lifelong learning.",
    "This leader supports ongoing learning and professional growth opportunities.",
];

pub const STRENGTH_CHOICES: [&str; 25] = [
    "Ability to guide others towards a common goal",
    "Possesses excellent oral communication skills",
    "Possesses effective written communication skills",
    "Great listener",
    "Expresses ideas clearly",
    "Supports teacher professional development",
    "Supports teachers in implementing effective instructional strategies",
    "Ability to build positive relationships with others",
    "Supports collaboration among all school stakeholders",
    "Ability to analyze challenges and implement solutions",
    "Creates a positive school culture",
    "Promotes and encourages innovation",
    "Supports and encourages continuous improvement",
    "Makes timely decisions aligned with school mission and goals",
    "Decisions encompass the needs of all stakeholders",
    "Uses data to inform major decisions",
    "Effectively manages emotions",
    "Resilient in effectively navigating change",
    "Able to navigate challenges and obstacles",
    "Has a clear vision for the school",
    "Able to motivate others to work towards shared goals",
    "Maintains a high level of integrity",
    "Create a positive school environment",
    "Committed to learning and growing professionally",
    "Is up to date on the latest research and best practices",
];

pub const OPPORTUNITY_CHOICES: [&str; 21] = [
    "Lacks a clear vision for the school",
    "Struggles to verbally communicate ideas",
    "Struggles to communicate in written formats",
    "Leadership contributes to low morale",
    "Resistant to change",
    "Struggles to foster collaboration",
    "Leadership promotes a lack of trust among others",
    "Struggles to address issues effectively",
    "Micromanages others",
    "Inhibits autonomy and creativity",
    "Provide more sufficient PD opportunities for all staff",
    "Struggles to create a positive school culture",
    "Improve skills to effectively engage parents or community",
    "Needs to improve listening skills",
    "Difficulty expressing ideas",
    "Should delegate more effectively (distribution of tasks)",
    "Could improve their feedback processes",
    "Could improve their problem solving skills",
    "Seems to not follow through",
    "Could improve their appreciation for diverse perspectives",
    "Could recognize others more often",
];
