use dfinstr::{
    accessors::{has_disjoint_read_write_regions, mark_disjoint_read_write_regions},
    attributes::{FrontendAttributed, FrontendAttributes},
    constants::{DISJOINT_READ_WRITE_REGIONS, FLAG_VALUE},
    instr::{InstrId, Instruction, Opcode},
};

fn fresh(id: u32) -> Instruction {
    Instruction::new(InstrId(id), Opcode::DynamicUpdateSlice, [])
}

#[test]
fn fresh_instruction_is_not_disjoint() {
    let instr = fresh(0);
    assert!(instr.frontend_attribute_sets().is_empty());
    assert!(!has_disjoint_read_write_regions(&instr));
}

#[test]
fn marking_sets_a_single_true_entry() {
    let mut instr = fresh(0);
    mark_disjoint_read_write_regions(&mut instr);

    assert!(has_disjoint_read_write_regions(&instr));
    assert_eq!(
        instr.frontend_attribute_sets(),
        &[FrontendAttributes::from_iter([(
            "disjoint_read_write_regions",
            "true"
        )])]
    );
    assert_eq!(
        instr.frontend_attribute(DISJOINT_READ_WRITE_REGIONS),
        Some(FLAG_VALUE)
    );
}

#[test]
fn marking_twice_appends_a_redundant_map() {
    let mut instr = fresh(0);
    mark_disjoint_read_write_regions(&mut instr);
    mark_disjoint_read_write_regions(&mut instr);

    assert!(has_disjoint_read_write_regions(&instr));
    assert_eq!(instr.frontend_attribute_sets().len(), 2);
    assert_eq!(
        instr.frontend_attribute_sets()[0],
        instr.frontend_attribute_sets()[1]
    );
}

#[test]
fn marking_one_instruction_leaves_others_untouched() {
    let mut a = fresh(0);
    let b = fresh(1);
    mark_disjoint_read_write_regions(&mut a);

    assert!(has_disjoint_read_write_regions(&a));
    assert!(!has_disjoint_read_write_regions(&b));
}

#[test]
fn unrelated_attributes_do_not_imply_disjointness() {
    let mut instr = fresh(0);
    instr.add_frontend_attributes(FrontendAttributes::from_iter([
        ("scheduling_group", "3"),
        ("disjoint_read_write", "true"),
    ]));
    instr.add_frontend_attributes(FrontendAttributes::flag("in_place"));

    assert!(!has_disjoint_read_write_regions(&instr));

    mark_disjoint_read_write_regions(&mut instr);
    assert!(has_disjoint_read_write_regions(&instr));
    assert_eq!(instr.frontend_attribute("scheduling_group"), Some("3"));
}

#[test]
fn presence_is_the_signal_regardless_of_value() {
    let mut instr = fresh(0);
    instr.add_frontend_attributes(FrontendAttributes::from_iter([(
        DISJOINT_READ_WRITE_REGIONS,
        "false",
    )]));

    assert!(has_disjoint_read_write_regions(&instr));
}

#[test]
fn query_accepts_a_mutable_reference() {
    let mut instr = fresh(0);
    let borrowed = &mut instr;
    mark_disjoint_read_write_regions(borrowed);
    assert!(has_disjoint_read_write_regions(&*borrowed));
}

#[test]
fn accessors_work_through_trait_objects() {
    let mut instr = fresh(0);
    {
        let dynamic: &mut dyn FrontendAttributed = &mut instr;
        mark_disjoint_read_write_regions(dynamic);
    }
    let dynamic: &dyn FrontendAttributed = &instr;
    assert!(has_disjoint_read_write_regions(dynamic));
}

#[test]
fn scenario_two_instructions() {
    let mut i = fresh(0);
    assert!(!has_disjoint_read_write_regions(&i));

    mark_disjoint_read_write_regions(&mut i);
    assert_eq!(i.frontend_attribute_sets().len(), 1);
    assert_eq!(
        i.frontend_attribute_sets()[0].to_string(),
        r#"{disjoint_read_write_regions="true"}"#
    );
    assert!(has_disjoint_read_write_regions(&i));

    let j = fresh(1);
    assert!(!has_disjoint_read_write_regions(&j));
}
