//! Behavioral tests for the `no-typos` rule through the library API.

use std::path::Path;

use notypos::config::{NotyposConfig, SpellingsConfig};
use notypos::lint::{LintDiagnostic, LintEngine, NodeKind, Severity};

const STATIC_PROPERTY: &str = "Typo in static class property declaration";
const LIFECYCLE_METHOD: &str = "Typo in component lifecycle method declaration";

fn check(source: &str) -> Vec<LintDiagnostic> {
    check_with(&NotyposConfig::default(), source)
}

fn check_with(config: &NotyposConfig, source: &str) -> Vec<LintDiagnostic> {
    LintEngine::from_config(config)
        .check_source(Path::new("Component.jsx"), source)
        .unwrap_or_else(|e| panic!("source should parse: {}\n{}", e, source))
}

fn messages(source: &str) -> Vec<String> {
    check(source).into_iter().map(|d| d.message).collect()
}

fn assert_valid(source: &str) {
    let diagnostics = check(source);
    assert!(
        diagnostics.is_empty(),
        "expected no diagnostics, got {:?}\n{}",
        diagnostics.iter().map(|d| &d.message).collect::<Vec<_>>(),
        source
    );
}

fn assert_messages(source: &str, expected: &[&str]) {
    assert_eq!(messages(source), expected, "{}", source);
}

mod valid {
    use super::*;

    #[test]
    fn capitalized_statics_on_plain_class() {
        assert_valid(
            r#"
            class First {
              static PropTypes = {key: "myValue"};
              static ContextTypes = {key: "myValue"};
              static ChildContextTypes = {key: "myValue"};
              static DefaultProps = {key: "myValue"};
            }
            "#,
        );
    }

    #[test]
    fn capitalized_assignments_on_plain_class() {
        assert_valid(
            r#"
            class First {}
            First.PropTypes = {key: "myValue"};
            First.ContextTypes = {key: "myValue"};
            First.ChildContextTypes = {key: "myValue"};
            First.DefaultProps = {key: "myValue"};
            "#,
        );
    }

    #[test]
    fn canonical_statics_on_component() {
        assert_valid(
            r#"
            class First extends Inferno.Component {
              static propTypes = {key: "myValue"};
              static contextTypes = {key: "myValue"};
              static childContextTypes = {key: "myValue"};
              static defaultProps = {key: "myValue"};
            }
            "#,
        );
    }

    #[test]
    fn canonical_assignments_on_component() {
        assert_valid(
            r#"
            class First extends Inferno.Component {}
            First.propTypes = {key: "myValue"};
            First.contextTypes = {key: "myValue"};
            First.childContextTypes = {key: "myValue"};
            First.defaultProps = {key: "myValue"};
            "#,
        );
    }

    // The capitalized forms are accepted spellings of their slots, not
    // typos. Keep this valid even though older rule versions flagged them.
    #[test]
    fn legacy_capitalized_spellings_on_component() {
        assert_valid(
            r#"
            class First extends Inferno.Component {
              static PropTypes = {key: PropTypes.string};
              static ContextTypes = {};
              static ChildContextTypes = {};
              static DefaultProps = {key: "myValue"};
            }
            First.DefaultProps = {};
            "#,
        );
    }

    #[test]
    fn instance_fields_are_not_checked() {
        for names in [
            ["propTypes", "contextTypes", "childContextTypes", "defaultProps"],
            ["PropTypes", "ContextTypes", "ChildContextTypes", "DefaultProps"],
            ["proptypes", "contexttypes", "childcontextypes", "defaultprops"],
        ] {
            let body: String = names
                .iter()
                .map(|name| format!("  {} = {{key: \"myValue\"}};\n", name))
                .collect();
            assert_valid(&format!("class MyClass {{\n{}}}", body));
        }
    }

    #[test]
    fn static_methods_on_plain_class() {
        assert_valid(
            r#"
            class MyClass {
              static PropTypes() {};
              static ContextTypes() {};
              static ChildContextTypes() {};
              static DefaultProps() {};
            }
            "#,
        );
        assert_valid(
            r#"
            class MyClass {
              static proptypes() {};
              static contexttypes() {};
              static childcontexttypes() {};
              static defaultprops() {};
            }
            "#,
        );
    }

    #[test]
    fn prototype_and_function_assignments_on_plain_class() {
        assert_valid(
            r#"
            class MyClass {}
            MyClass.prototype.PropTypes = function() {};
            MyClass.prototype.ContextTypes = function() {};
            MyClass.prototype.ChildContextTypes = function() {};
            MyClass.prototype.DefaultProps = function() {};
            "#,
        );
        assert_valid(
            r#"
            class MyClass {}
            MyClass.PropTypes = function() {};
            MyClass.ContextTypes = function() {};
            MyClass.ChildContextTypes = function() {};
            MyClass.DefaultProps = function() {};
            "#,
        );
    }

    #[test]
    fn function_without_markup_is_not_a_component() {
        assert_valid(
            r#"
            function MyRandomFunction() {}
            MyRandomFunction.PropTypes = {};
            MyRandomFunction.ContextTypes = {};
            MyRandomFunction.ChildContextTypes = {};
            MyRandomFunction.DefaultProps = {};
            "#,
        );
    }

    #[test]
    fn computed_names_are_not_checked() {
        assert_valid(
            r#"
            class First extends Inferno.Component {}
            First["prop" + "Types"] = {};
            First["context" + "Types"] = {};
            First["childContext" + "Types"] = {};
            First["default" + "Props"] = {};
            "#,
        );
        assert_valid(
            r#"
            class First extends Inferno.Component {}
            First["PROP" + "TYPES"] = {};
            First["CONTEXT" + "TYPES"] = {};
            First["CHILDCONTEXT" + "TYPES"] = {};
            First["DEFAULT" + "PROPS"] = {};
            "#,
        );
        assert_valid(
            r#"
            const propTypes = "PROPTYPES"
            const contextTypes = "CONTEXTTYPES"
            const childContextTypes = "CHILDCONTEXTTYPES"
            const defautProps = "DEFAULTPROPS"

            class First extends Inferno.Component {}
            First[propTypes] = {};
            First[contextTypes] = {};
            First[childContextTypes] = {};
            First[defautProps] = {};
            "#,
        );
    }

    #[test]
    fn canonical_lifecycle_methods() {
        assert_valid(
            r#"
            class Hello extends Inferno.Component {
              componentWillMount() { }
              componentDidMount() { }
              componentWillReceiveProps() { }
              shouldComponentUpdate() { }
              componentWillUpdate() { }
              componentDidUpdate() { }
              componentWillUnmount() { }
              render() {
                return <div>Hello {this.props.name}</div>;
              }
            }
            "#,
        );
    }

    #[test]
    fn lifecycle_names_on_plain_class() {
        assert_valid(
            r#"
            class MyClass {
              componentwillmount() { }
              componentdidmount() { }
              componentwillreceiveprops() { }
              shouldcomponentupdate() { }
              componentwillupdate() { }
              componentdidupdate() { }
              componentwillUnmount() { }
              render() { }
            }
            "#,
        );
        assert_valid(
            r#"
            class MyClass {
              Componentwillmount() { }
              Componentdidmount() { }
              Componentwillreceiveprops() { }
              Shouldcomponentupdate() { }
              Componentwillupdate() { }
              Componentdidupdate() { }
              ComponentwillUnmount() { }
              Render() { }
            }
            "#,
        );
    }

    #[test]
    fn annotated_component_declared_after_use() {
        assert_valid(
            r#"
            MyComponent.PROPTYPES = {}
            /** @extends Inferno.Component */
            class MyComponent extends BaseComponent {}
            "#,
        );
    }

    #[test]
    fn unrelated_code() {
        assert_valid(
            r#"
            function test(b) {
              return a.bind(b);
            }
            function a() {}
            "#,
        );
        assert_valid(
            r#"
            const fn = (err, res) => {
              const { body: data = {} } = { ...res };
              data.time = data.time || {};
            };
            "#,
        );
    }

    #[test]
    fn well_formed_schemas() {
        let schemas = [
            "{ a: PropTypes.number.isRequired }",
            "{ e: PropTypes.shape({ ea: PropTypes.string, }) }",
            r#"{
              a: PropTypes.string,
              b: PropTypes.string.isRequired,
              c: PropTypes.shape({
                d: PropTypes.string,
                e: PropTypes.number.isRequired,
              }).isRequired
            }"#,
            "{ a: PropTypes.oneOfType([ PropTypes.string, PropTypes.number ]) }",
            "{ a: PropTypes.oneOf([ 'hello', 'hi' ]) }",
            "{ b: string.isRequired, c: PropTypes.shape({ d: number.isRequired, }).isRequired }",
        ];
        for schema in schemas {
            for property in ["propTypes", "contextTypes", "childContextTypes"] {
                assert_valid(&format!(
                    "class Component extends Inferno.Component {{}};\nComponent.{} = {}",
                    property, schema
                ));
            }
        }
    }

    #[test]
    fn shape_without_arguments() {
        assert_valid(
            r#"
            class Component extends Inferno.Component {};
            Component.propTypes = {
              a: PropTypes.shape(),
            };
            Component.contextTypes = {
              a: PropTypes.shape(),
            };
            "#,
        );
    }
}

mod invalid {
    use super::*;

    const TYPOED_STATICS: &[&str] = &[
        "proptypes",
        "PROPTYPES",
        "contexttypes",
        "Contexttypes",
        "childcontexttypes",
        "CHILDCONTEXTTYPES",
        "defaultprops",
        "Defaultprops",
    ];

    #[test]
    fn typoed_static_field_on_component() {
        for name in TYPOED_STATICS {
            let source = format!(
                "class Component extends Inferno.Component {{\n  static {} = {{}};\n}}",
                name
            );
            let diagnostics = check(&source);
            assert_eq!(diagnostics.len(), 1, "{}", source);
            assert_eq!(diagnostics[0].message, STATIC_PROPERTY);
            assert_eq!(diagnostics[0].node_kind, Some(NodeKind::ClassProperty));
        }
    }

    #[test]
    fn typoed_assignment_on_component_class() {
        for name in TYPOED_STATICS {
            let source = format!(
                "class Component extends Inferno.Component {{}}\nComponent.{} = {{}}",
                name
            );
            let diagnostics = check(&source);
            assert_eq!(diagnostics.len(), 1, "{}", source);
            assert_eq!(diagnostics[0].message, STATIC_PROPERTY);
            assert_eq!(diagnostics[0].node_kind, Some(NodeKind::MemberExpression));
        }
    }

    #[test]
    fn typoed_assignment_on_markup_function() {
        for name in TYPOED_STATICS {
            let source = format!(
                "function MyComponent() {{ return (<div>{{this.props.myProp}}</div>) }}\nMyComponent.{} = {{}}",
                name
            );
            assert_messages(&source, &[STATIC_PROPERTY]);
        }
    }

    #[test]
    fn assignment_before_class_declaration() {
        assert_messages(
            r#"
            Component.defaultprops = {}
            class Component extends Inferno.Component {}
            "#,
            &[STATIC_PROPERTY],
        );
    }

    #[test]
    fn annotated_component_declared_before_use() {
        assert_messages(
            r#"
            /** @extends Inferno.Component */
            class MyComponent extends BaseComponent {}
            MyComponent.PROPTYPES = {}
            "#,
            &[STATIC_PROPERTY],
        );
    }

    #[test]
    fn capitalized_lifecycle_methods() {
        let diagnostics = check(
            r#"
            class Hello extends Inferno.Component {
              ComponentWillMount() { }
              ComponentDidMount() { }
              ComponentWillReceiveProps() { }
              ShouldComponentUpdate() { }
              ComponentWillUpdate() { }
              ComponentDidUpdate() { }
              ComponentWillUnmount() { }
              render() {
                return <div>Hello {this.props.name}</div>;
              }
            }
            "#,
        );
        assert_eq!(diagnostics.len(), 7);
        assert!(diagnostics.iter().all(|d| d.message == LIFECYCLE_METHOD
            && d.node_kind == Some(NodeKind::MethodDefinition)));
    }

    #[test]
    fn misspelled_lifecycle_methods_including_render() {
        let diagnostics = check(
            r#"
            class Hello extends Inferno.Component {
              Componentwillmount() { }
              Componentdidmount() { }
              Componentwillreceiveprops() { }
              Shouldcomponentupdate() { }
              Componentwillupdate() { }
              Componentdidupdate() { }
              Componentwillunmount() { }
              Render() {
                return <div>Hello {this.props.name}</div>;
              }
            }
            "#,
        );
        assert_eq!(diagnostics.len(), 8);
        assert!(diagnostics
            .iter()
            .all(|d| d.node_kind == Some(NodeKind::MethodDefinition)));
    }

    #[test]
    fn lowercase_lifecycle_methods() {
        let diagnostics = check(
            r#"
            class Hello extends Inferno.Component {
              componentwillmount() { }
              componentdidmount() { }
              componentwillreceiveprops() { }
              shouldcomponentupdate() { }
              componentwillupdate() { }
              componentdidupdate() { }
              componentwillunmount() { }
              render() {
                return <div>Hello {this.props.name}</div>;
              }
            }
            "#,
        );
        assert_eq!(diagnostics.len(), 7);
        let lines: Vec<_> = diagnostics
            .iter()
            .map(|d| d.span.as_ref().unwrap().start_line)
            .collect();
        assert_eq!(lines, [3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn capitalized_validator_in_chain() {
        assert_messages(
            r#"
            class Component extends Inferno.Component {};
            Component.propTypes = {
                a: PropTypes.Number.isRequired
            }
            "#,
            &["Typo in declared prop type: Number"],
        );
        assert_messages(
            r#"
            class Component extends Inferno.Component {};
            Component.propTypes = {
                a: PropTypes.Number
            }
            "#,
            &["Typo in declared prop type: Number"],
        );
    }

    #[test]
    fn lowercase_required_qualifier() {
        let diagnostics = check(
            r#"
            class Component extends Inferno.Component {};
            Component.propTypes = {
                a: PropTypes.number.isrequired
            }
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Typo in prop type chain qualifier: isrequired"
        );
        assert_eq!(diagnostics[0].code.as_deref(), Some("ChainQualifierTypo"));
    }

    #[test]
    fn typo_inside_shape() {
        let diagnostics = check(
            r#"
            class Component extends Inferno.Component {};
            Component.propTypes = {
              a: PropTypes.shape({
                b: PropTypes.String,
                c: PropTypes.number.isRequired,
              })
            }
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Typo in declared prop type: String");
        assert_eq!(diagnostics[0].related.len(), 1);
        assert!(diagnostics[0].related[0].message.contains("`a`"));
    }

    #[test]
    fn typo_inside_one_of_type() {
        assert_messages(
            r#"
            class Component extends Inferno.Component {};
            Component.propTypes = {
              a: PropTypes.oneOfType([
                PropTypes.bools,
                PropTypes.number,
              ])
            }
            "#,
            &["Typo in declared prop type: bools"],
        );
    }

    #[test]
    fn several_validator_typos_in_source_order() {
        for property in ["propTypes", "childContextTypes"] {
            let source = format!(
                r#"
                class Component extends Inferno.Component {{}};
                Component.{} = {{
                  a: PropTypes.bools,
                  b: PropTypes.Array,
                  c: PropTypes.function,
                  d: PropTypes.objectof,
                }}
                "#,
                property
            );
            assert_messages(
                &source,
                &[
                    "Typo in declared prop type: bools",
                    "Typo in declared prop type: Array",
                    "Typo in declared prop type: function",
                    "Typo in declared prop type: objectof",
                ],
            );
        }
    }

    #[test]
    fn bare_validators_with_lowercase_qualifier() {
        assert_messages(
            r#"
            class Component extends Inferno.Component {};
            Component.propTypes = {
              a: string.isrequired,
              b: shape({
                c: number
              }).isrequired
            }
            "#,
            &[
                "Typo in declared prop type: isrequired",
                "Typo in prop type chain qualifier: isrequired",
            ],
        );
    }
}

mod configuration {
    use super::*;

    const COMPONENT_WITH_TYPO: &str = r#"
        class Hello extends React.PureComponent {
          componentdidmount() { }
          render() { return <div />; }
        }
    "#;

    #[test]
    fn severity_comes_from_config() {
        let config = NotyposConfig {
            severity: Some(Severity::Error),
            ..Default::default()
        };
        let diagnostics = check_with(&config, COMPONENT_WITH_TYPO);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn extra_spellings_add_canonical_names() {
        let source = r#"
            class Hello extends Component {
              getSnapshotBeforeUpdate() { }
              getsnapshotbeforeupdate() { }
              render() { return <div />; }
            }
        "#;
        assert!(check(source).is_empty());

        let config = NotyposConfig {
            spellings: SpellingsConfig {
                lifecycle_methods: vec!["getSnapshotBeforeUpdate".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let diagnostics = check_with(&config, source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span.as_ref().unwrap().start_line, 4);
    }

    #[test]
    fn diagnostics_carry_the_rule_id() {
        let diagnostics = check(COMPONENT_WITH_TYPO);
        assert_eq!(diagnostics[0].rule_id.0, "no-typos");
        assert_eq!(diagnostics[0].code.as_deref(), Some("LifecycleMethodTypo"));
    }
}
