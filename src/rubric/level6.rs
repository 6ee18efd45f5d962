use crate::model::competency::COMPETENCY_COUNT;
use crate::model::grade::GRADE_COUNT;

// Indexed by competency, then by rank from F to A.
pub(super) const LEVEL6: [[&str; GRADE_COUNT]; COMPETENCY_COUNT] = [
    // research
    [
        "Research is minimal and incomplete. No meaningful insight is drawn due to gaps in the research process.",
        "Relies mainly on secondary sources and surface level findings from primary research with limited to no analysis. Insight is vague or undeveloped, and needs support to begin connecting research to the brief.",
        "Research is based on primary and secondary sources aided by guided prompts. Begins to make links between research and the brief, though interpretations may lack depth. Shows emerging independence in how research is applied.",
        "Shows consistent curiosity and ownership of the research process. Selects relevant primary and secondary sources with care. Compares and connects findings to inform early creative choices. Research is purposeful and clearly learner-led.",
        "Demonstrates an independent and highly investigative approach. Confidently explores both primary and secondary sources, identifying unexpected insights that challenge or reshape the initial understanding of the brief. These insights clearly guide and strengthen creative direction.",
    ],
    // concepts
    [
        "No real meaningful ideas generated or explored. Lacks engagement with the creative process.",
        "Presents one main idea that feels safe or predictable. Shows hesitance to explore new or unfamiliar possibilities. Limited evidence of creative development or deeper thinking.",
        "Begins to move beyond obvious or conventional ideas. Creative risk-taking is limited or cautious. Needs guidance to develop ideas further or explore less familiar directions. Insight is present but not fully integrated into concept development.",
        "Develops a range of creative ideas, which challenge familiar thinking. Willing to take creative risks in parts. Insights meaningfully influence the direction of the concept, showing emerging depth and purpose.",
        "Generates a range of bold, original ideas that push creative boundaries. Uses insight and research evidence to shape and strengthen concepts. Comfortable navigating uncertainty and taking creative risks. A clear 'golden thread' links the concept to deeper meaning and purpose.",
    ],
    // failFix
    [
        "Ideas remain largely unchanged. No reflection or adaptation is evident in the process.",
        "Avoids change unless directly prompted. Revisions lack depth or purpose. Iteration feels uncertain or directionless.",
        "Shows a willingness to change direction. Makes some adjustments, but changes may be minimal or cautious. Feedback is acknowledged but not always integrated meaningfully. Tends to stay within safe or familiar territory during testing.",
        "Confident testing and refining of ideas. Reflection on peer / external feedback leading to a growing understanding of iteration. Makes considered changes in response to the brief. Has an ability to explore uncertainty with purpose.",
        "Independently tests, reflects, and refines ideas. Uses both peer / external feedback and self reflection to make purposeful improvements. Actively embraces failure as part of the process and adjusts concepts in line with the brief. Iteration is purposeful and meaningful.",
    ],
    // communicate
    [
        "No meaningful communication is present. Work fails to convey the concept or creative process.",
        "Ideas are poorly communicated. Presentation lacks structure or clarity. Needs considerable guidance to articulate creative intention.",
        "Presents work with clarity. Communication may lack impact and have gaps in the story. Message is understandable but not yet refined. Needs further development to become engaging or persuasive.",
        "Communicates ideas clearly with effective storytelling and appropriate presentation methods. Final presentation demonstrates a personal and motivated approach.",
        "Communicates with clarity, confidence, and creativity throughout. Uses a range of appropriate and engaging methods to prepare and deliver a compelling story. Final presentation shows a strong personal voice and attention to detail. It is memorable and makes the audience \"feel\" something.",
    ],
    // evaluate
    [
        "No meaningful reflection offered. Lacks insight into process, learning, or outcomes.",
        "Reflection is limited and mostly descriptive. Decisions are acknowledged but not evaluated. Shows minimal engagement with learning or growth.",
        "Provides basic reflection on the process. Aware of stages and decisions made but may not fully explain reasoning. Reflection tends to respond to prompting rather than being independently driven.",
        "Offers thoughtful reflection across the project. Analyses key decisions and begins to justify them. Feedback is considered. Shows emerging understanding of how choices contributed to development and outcome.",
        "Evaluates every stage of the process with depth and clarity. Reflects critically on what worked, what didn't, and why. Feedback and self-awareness are used to shape outcomes. Shows ownership of personal growth and learning throughout.",
    ],
];
