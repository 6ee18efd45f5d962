use crate::model::competency::COMPETENCY_COUNT;
use crate::model::grade::GRADE_COUNT;

// Indexed by competency, then by rank from F to A.
pub(super) const LEVEL5: [[&str; GRADE_COUNT]; COMPETENCY_COUNT] = [
    // research
    [
        "Lacks purposeful research. Work is disconnected, incomplete, or shows little understanding of the brief or topic.",
        "Explores a narrow selection of sources with limited questioning. Information gathered tends to reflect commonly known ideas. Limited evidence of deeper interpretation.",
        "Engages with the brief and highlights important details. Uses a range of sources and makes basic comparisons. Starts to interpret and personalise findings, though connections may still be surface level.",
        "Demonstrates a good understanding of the brief, identifying its key aspects. Gathers information from a variety of sources. Begins to draw thoughtful connections and summarise key findings.",
        "Shows motivation and curiosity throughout the process. Analyses the brief to define the problem clearly. Investigates a wide range of reliable secondary sources, potentially primary too. Reflects critically on findings to develop original and relevant personal insights.",
    ],
    // concepts
    [
        "No meaningful ideas generated. No engagement with the brief.",
        "Produces simple or predictable ideas. Requires support or prompting to explore alternatives or take creative risks. Limited use of creative thinking strategies.",
        "Generates a small number of ideas based on familiar or existing themes. Uses some creative thinking tools to explore possibilities. Shows occasional imaginative thinking but may not move far beyond the obvious.",
        "Develops creative ideas through the use of warm-ups and brainstorming strategies. Builds thoughtfully on existing solutions while beginning to introduce original thinking. Ideas show a clear response to the challenge.",
        "Demonstrates an ability to generate a wide range of original ideas. Uses creative warm-up techniques effectively to explore several directions. Concepts clearly respond to research and are focused on solving the identified problem in imaginative ways.",
    ],
    // failFix
    [
        "No evidence of iteration. Ideas remain unchanged or undeveloped.",
        "Makes only minor or surface-level changes. Needs prompting to adjust or improve ideas. Limited evidence of reflection or deeper iteration.",
        "Shows awareness that concepts can develop in different directions. Attempts to make changes but may rely on support to move beyond basic / superficial changes.",
        "Ideas develop in a few directions and there is a willingness to adapt concepts. Some feedback is used to shape changes, and there is evidence of thinking about user needs or purpose.",
        "Responds thoughtfully to feedback. Refines concepts with increasing confidence, showing an ability to stay aligned with the brief. Creative and effective concepts are developed through iteration.",
    ],
    // communicate
    [
        "Lack of communication throughout, work is missing, incomplete, or lacks any meaning.",
        "Communication is unclear or incomplete. Relies heavily on support to present work. The message is difficult to follow.",
        "Process is communicated with some clarity, though delivery may be underdeveloped. Presentation methods are basic and ideas lack clarity, it may need further refinement to aid understanding.",
        "Presents work effectively with appropriate use of communication methods. Storytelling is developing and mostly supports the concept. There is a clear effort to engage the audience of their presentation.",
        "Communicates ideas clearly and confidently through well-executed work. Uses appropriate visual, verbal, or written methods to present concepts. Demonstrates strong storytelling, a clear link to the original brief and creative intention.",
    ],
    // evaluate
    [
        "No reflection throughout the process.",
        "Reflection is vague or superficial. Comments focus on describing what was done, with little or no explanation of decisions or learning.",
        "Reflects on key stages of the process. Comments on strengths and weaknesses, though may lack depth. Shows some awareness of their learning journey.",
        "Considers how well the project meets the brief. Reflects on key decisions. Shows some awareness of how work could be improved or developed further.",
        "Reflects thoughtfully on the creative process. Identifies and evaluates the skills used and how choices shaped the outcome. Feedback is considered and used to develop thinking. Clear links are made between decision making and the brief.",
    ],
];
