//! services/engine/src/chat/responder.rs
//!
//! Maps a classified response category to its canned answer template.
//!
//! The mapping is total over [`ResponseCategory`]: the classifier's output
//! domain is exactly this function's input domain, so an unmapped category
//! is unreachable by construction. Template bodies are domain content, not
//! algorithm; they use the markup dialect understood by the renderer.

use crate::chat::intent::{CodeLanguage, ResponseCategory, ScienceField};

/// A generated assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// True for categories whose canonical answer is code- or
    /// formula-heavy; such replies bypass markup rendering.
    pub is_structured: bool,
}

/// Produces the canned reply for a category.
pub fn generate(category: &ResponseCategory) -> Reply {
    match category {
        ResponseCategory::LectureKeyConcepts => Reply {
            text: LECTURE_KEY_CONCEPTS.to_string(),
            is_structured: false,
        },
        ResponseCategory::LectureSummary => Reply {
            text: LECTURE_SUMMARY.to_string(),
            is_structured: false,
        },
        ResponseCategory::CodeExample(CodeLanguage::Python) => Reply {
            text: PYTHON_EXAMPLE.to_string(),
            is_structured: true,
        },
        ResponseCategory::LayoutHelp => Reply {
            text: LAYOUT_HELP.to_string(),
            is_structured: true,
        },
        ResponseCategory::EquationSolve => Reply {
            text: EQUATION_SOLVE.to_string(),
            is_structured: true,
        },
        ResponseCategory::ScienceTopic(ScienceField::QuantumComputing) => Reply {
            text: QUANTUM_COMPUTING.to_string(),
            is_structured: false,
        },
        ResponseCategory::ScienceTopic(ScienceField::Photosynthesis) => Reply {
            text: PHOTOSYNTHESIS.to_string(),
            is_structured: false,
        },
        ResponseCategory::FrameworkComparison => Reply {
            text: FRAMEWORK_COMPARISON.to_string(),
            is_structured: true,
        },
        ResponseCategory::DefaultLectureAware => Reply {
            text: DEFAULT_LECTURE_AWARE.to_string(),
            is_structured: false,
        },
        ResponseCategory::DefaultGeneral => Reply {
            text: DEFAULT_GENERAL.to_string(),
            is_structured: false,
        },
    }
}

const LECTURE_KEY_CONCEPTS: &str = "Based on the lecture analysis, here are the main concepts covered:\n\n\
**1. Neural Networks Fundamentals**\n- Basic architecture and components\n- Forward propagation process\n\n\
**2. Activation Functions**\n- ReLU, Sigmoid, and Tanh functions\n- Their mathematical properties and use cases\n\n\
**3. Backpropagation Algorithm**\n- Gradient computation and chain rule\n- Weight update mechanisms\n\n\
**4. Optimization Techniques**\n- Gradient descent variations\n- Learning rate scheduling\n\n\
**5. Regularization Methods**\n- Preventing overfitting\n- Dropout and L1/L2 regularization\n\n\
These concepts form the foundation of modern deep learning systems. Would you like me to elaborate on any specific topic?";

const LECTURE_SUMMARY: &str = "## Lecture Summary\n\n\
**Key Learning Objectives:**\n\
- **Neural Network Architecture** - Understanding how layers connect and process information\n\
- **Training Process** - How networks learn through backpropagation and optimization\n\
- **Practical Applications** - Real-world use cases and implementation considerations\n\n\
**Important Formulas:**\n\
- Activation: `f(x) = max(0, x)` for ReLU\n\
- Loss: `L = (y_pred - y_true)^2` for MSE\n\n\
**Next Steps:**\n\
- Practice implementing basic neural networks\n\
- Experiment with different activation functions\n\n\
Would you like me to explain any of these concepts in more detail?";

const PYTHON_EXAMPLE: &str = "Here's a Python function example:\n\n\
```python\n\
def advanced_sort(data, key=None, reverse=False):\n\
    \"\"\"Sort a list with an optional key and direction.\"\"\"\n\
    return sorted(data, key=key, reverse=reverse)\n\n\
numbers = [64, 34, 25, 12, 22, 11, 90]\n\
print(advanced_sort(numbers))  # [11, 12, 22, 25, 34, 64, 90]\n\n\
people = [{'name': 'Alice', 'age': 30}, {'name': 'Bob', 'age': 25}]\n\
print(advanced_sort(people, key=lambda x: x['age']))  # Sort by age\n\
```\n\n\
This function supports custom key functions for complex sorting and reverse ordering. \
Would you like me to show other sorting algorithms?";

const LAYOUT_HELP: &str = "Here are the most effective ways to center elements in CSS:\n\n\
## 1. Flexbox (Recommended)\n\
```css\n\
.container {\n\
  display: flex;\n\
  justify-content: center;\n\
  align-items: center;\n\
  height: 100vh;\n\
}\n\
```\n\n\
## 2. CSS Grid\n\
```css\n\
.container {\n\
  display: grid;\n\
  place-items: center;\n\
}\n\
```\n\n\
## 3. Absolute Positioning + Transform\n\
```css\n\
.centered-item {\n\
  position: absolute;\n\
  top: 50%;\n\
  left: 50%;\n\
  transform: translate(-50%, -50%);\n\
}\n\
```\n\n\
Use **Flexbox** for most modern layouts and **Grid** for complex 2D layouts. \
Which centering method would work best for your use case?";

const EQUATION_SOLVE: &str = "I'll solve this step-by-step:\n\n\
**Given equation:** 2x + 5 = 15\n\n\
**Step 1:** Subtract 5 from both sides\n\
```\n2x + 5 - 5 = 15 - 5\n2x = 10\n```\n\n\
**Step 2:** Divide both sides by 2\n\
```\nx = 5\n```\n\n\
**Verification:** 2(5) + 5 = 15 ✓\n\n\
**Answer:** x = 5\n\n\
General method for linear equations (ax + b = c): isolate the variable term, \
divide by the coefficient, and always verify by substituting back.";

const QUANTUM_COMPUTING: &str = "## Quantum Computing Explained Simply\n\n\
**Classical vs Quantum Bits:**\n\
- **Classical bit:** Can be either 0 OR 1\n\
- **Quantum bit (qubit):** Can be 0, 1, OR both simultaneously (superposition)\n\n\
**Key Quantum Principles:**\n\
- **Superposition** - Like a spinning coin, both heads and tails until it lands\n\
- **Entanglement** - Measuring one qubit instantly affects its partner\n\
- **Interference** - Amplifies correct answers and cancels wrong ones\n\n\
**Real-World Applications:**\n\
- Cryptography and unbreakable codes\n\
- Drug discovery through molecular simulation\n\
- Financial modeling and optimization\n\n\
Current systems are fragile and error-prone, but the field is moving fast. \
Want to know more about any specific aspect?";

const PHOTOSYNTHESIS: &str = "## Photosynthesis: Nature's Solar Power System\n\n\
**Simple Definition:**\n\
Plants convert sunlight, water, and carbon dioxide into glucose and oxygen.\n\n\
**The Chemical Equation:**\n\
`6CO2 + 6H2O + light energy -> C6H12O6 + 6O2`\n\n\
**Two Main Stages:**\n\
- **Light-Dependent Reactions** - Chlorophyll absorbs light in the thylakoids, producing ATP, NADPH and oxygen\n\
- **Light-Independent Reactions** - The Calvin Cycle in the stroma uses that energy to fix CO2 into glucose\n\n\
**Why It's Important:**\n\
- Nearly all the oxygen we breathe comes from photosynthesis\n\
- It is the foundation of every food chain\n\n\
Would you like me to explain any specific part in more detail?";

const FRAMEWORK_COMPARISON: &str = "## React vs Vue: Comparison\n\n\
**Learning Curve:** React has a steeper curve (JSX, hooks); Vue is gentler with HTML-like templates.\n\n\
**React Component:**\n\
```jsx\n\
function Counter() {\n\
  const [count, setCount] = useState(0);\n\
  return <button onClick={() => setCount(count + 1)}>{count}</button>;\n\
}\n\
```\n\n\
**Vue Component:**\n\
```vue\n\
<template>\n\
  <button @click=\"count++\">{{ count }}</button>\n\
</template>\n\
```\n\n\
**Choose React** for large, complex applications and a bigger ecosystem. \
**Choose Vue** for rapid prototyping and simpler syntax. Both are excellent; \
the best fit depends on your team and project.";

const DEFAULT_LECTURE_AWARE: &str = "That's a great question! Based on the lecture content, \
I can help you understand this concept better. The key is to break it down into smaller, \
manageable parts. Could you be more specific about what aspect you'd like me to focus on?\n\n\
I can help with:\n\
- **Concept explanations** with examples\n\
- **Step-by-step breakdowns** of complex topics\n\
- **Practical applications** and use cases\n\n\
What would be most helpful for your understanding?";

const DEFAULT_GENERAL: &str = "I'd be happy to help you with that! To provide the most \
accurate and helpful response, could you give me a bit more context?\n\n\
I can assist with:\n\
- **Programming & Development** - code examples, debugging, best practices\n\
- **Science & Mathematics** - step-by-step solutions and explanations\n\
- **Academic & Research** - writing, structure, methodology\n\
- **Creative & General** - analysis, facts, content creation\n\n\
What specific topic or problem would you like help with?";
